use bevy::prelude::*;

use super::coloration::{paint_attributes, SurfaceSide};
use super::edge_profile::EdgeProfileSelector;
use super::template::{TemplateMesh, TemplateSet};
use crate::components::{
    CollisionProxy, DeformedMesh, SubMesh, SurfacePaints, WingKind, WingMeshes, WingParameters,
    WingPart,
};
use crate::resources::ParameterLimits;

/// Template thickness and edge depth every deviation factor is relative to.
const REFERENCE_THICKNESS: f32 = 0.24;
const WING_TIP_THRESHOLD: f32 = -0.05;
const WING_EDGE_TIP_THRESHOLD: f32 = -0.1;
/// Extra travel allowed to a control surface's root offset before it is clamped.
const CTRL_OFFSET_SLACK: f32 = 0.15;
/// Root plus tip edge width below which an edge gets no collision.
const EDGE_COLLISION_MIN_WIDTH: f64 = 0.05;

const UNPAINTED: ([f32; 4], Vec2) = ([0.0; 4], Vec2::ZERO);

fn finite(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn param(value: f64) -> f32 {
    finite(value as f32)
}

fn sanitize(v: Vec3) -> Vec3 {
    Vec3::new(finite(v.x), finite(v.y), finite(v.z))
}

fn is_axis(normal: Vec3, axis: Vec3) -> bool {
    normal.distance_squared(axis) < 1e-8
}

/// Side faces of control-surface templates point along ±z.
fn is_side(normal: Vec3) -> bool {
    is_axis(normal, Vec3::Z) || is_axis(normal, Vec3::NEG_Z)
}

/// Clamp that tolerates `min > max` by preferring `min`.
fn clamp_soft(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[derive(Default)]
struct MeshBuilder {
    mesh: DeformedMesh,
}

impl MeshBuilder {
    fn with_capacity(count: usize, painted: bool) -> Self {
        let paint_capacity = if painted { count } else { 0 };
        Self {
            mesh: DeformedMesh {
                positions: Vec::with_capacity(count),
                uvs: Vec::with_capacity(count),
                colors: Vec::with_capacity(paint_capacity),
                uv2: Vec::with_capacity(paint_capacity),
            },
        }
    }

    fn vertex(&mut self, position: Vec3, uv: Vec2) {
        self.mesh.positions.push(sanitize(position));
        self.mesh.uvs.push(Vec2::new(finite(uv.x), finite(uv.y)));
    }

    fn paint(&mut self, (color, uv2): ([f32; 4], Vec2)) {
        self.mesh.colors.push(color);
        self.mesh.uv2.push(uv2);
    }

    fn build(self) -> DeformedMesh {
        self.mesh
    }
}

fn sub_mesh(mesh: DeformedMesh, visible: bool, collides: bool) -> SubMesh {
    let collision = if collides {
        CollisionProxy::rebuild(&mesh)
    } else {
        CollisionProxy::disabled()
    };
    SubMesh {
        mesh,
        visible,
        collision,
    }
}

/// Reshapes every template of the part's class. All edge variants are deformed so
/// part bounds do not depend on which variant was last shown.
pub fn deform(
    templates: &TemplateSet,
    params: &WingParameters,
    part: &WingPart,
    limits: &ParameterLimits,
) -> WingMeshes {
    match part.kind {
        WingKind::Wing => deform_wing(templates, params, part),
        WingKind::ControlSurface => deform_control_surface(templates, params, part, limits),
    }
}

// --- Wing ---

/// Wing station values, already divided by the rescale factor.
struct WingStations {
    length: f32,
    thickness_root: f32,
    thickness_tip: f32,
    width_root: f32,
    width_tip: f32,
    /// Root offset in template z, sign flipped against the parameter.
    offset_root: f32,
    offset_tip: f32,
    mirrored: bool,
}

impl WingStations {
    fn new(params: &WingParameters, part: &WingPart) -> Self {
        let r = part.effective_rescale() as f32;
        Self {
            length: param(params.length) / r,
            thickness_root: param(params.thickness_root) / REFERENCE_THICKNESS / r,
            thickness_tip: param(params.thickness_tip) / REFERENCE_THICKNESS / r,
            width_root: param(params.width_root) / r,
            width_tip: param(params.width_tip) / r,
            offset_root: -param(params.offset_root) / r,
            offset_tip: param(params.offset_tip) / r,
            mirrored: part.mirrored,
        }
    }

    fn tip_leading_z(&self) -> f32 {
        -self.width_tip / 2.0 + self.offset_tip
    }

    fn tip_trailing_z(&self) -> f32 {
        self.width_tip / 2.0 + self.offset_tip
    }

    fn root_leading_z(&self) -> f32 {
        self.offset_root - self.width_root / 2.0
    }

    fn root_trailing_z(&self) -> f32 {
        self.offset_root + self.width_root / 2.0
    }

    /// Planform position of a section or surface vertex.
    fn place(&self, p: Vec3) -> Vec3 {
        let leading = p.z < 0.0;
        if p.x < WING_TIP_THRESHOLD {
            let z = if leading {
                self.tip_leading_z()
            } else {
                self.tip_trailing_z()
            };
            Vec3::new(-self.length, p.y * self.thickness_tip, z)
        } else {
            let z = if leading {
                self.root_leading_z()
            } else {
                self.root_trailing_z()
            };
            Vec3::new(p.x, p.y * self.thickness_root, z)
        }
    }
}

fn deform_wing(templates: &TemplateSet, params: &WingParameters, part: &WingPart) -> WingMeshes {
    let stations = WingStations::new(params, part);
    let selector = EdgeProfileSelector::WING;
    let active_leading = selector.select(params.edge_type_leading, part.mirrored);
    let active_trailing = selector.select(params.edge_type_trailing, part.mirrored);
    let r = part.effective_rescale() as f32;

    let leading = EdgeSpec {
        side: SurfaceSide::LeadingEdge,
        depth_root: param(params.edge_width_leading_root) / REFERENCE_THICKNESS / r,
        depth_tip: param(params.edge_width_leading_tip) / REFERENCE_THICKNESS / r,
        painted: params.has_leading_edge(),
        collides: params.edge_width_leading_root + params.edge_width_leading_tip
            > EDGE_COLLISION_MIN_WIDTH,
    };
    let trailing = EdgeSpec {
        side: SurfaceSide::TrailingEdge,
        depth_root: param(params.edge_width_trailing_root) / REFERENCE_THICKNESS / r,
        depth_tip: param(params.edge_width_trailing_tip) / REFERENCE_THICKNESS / r,
        painted: params.has_trailing_edge(),
        collides: params.edge_width_trailing_root + params.edge_width_trailing_tip
            > EDGE_COLLISION_MIN_WIDTH,
    };

    let edges = |spec: &EdgeSpec, active: usize| -> Vec<SubMesh> {
        templates
            .edges
            .iter()
            .enumerate()
            .map(|(index, template)| {
                let mesh = deform_wing_edge(template, &stations, spec, &params.paint);
                let is_active = index == active;
                sub_mesh(mesh, is_active, is_active && index > 0 && spec.collides)
            })
            .collect()
    };

    WingMeshes {
        structure: sub_mesh(deform_wing_section(&templates.structure, &stations), true, true),
        surface: sub_mesh(
            deform_wing_surface(&templates.surface, &stations, &params.paint),
            true,
            false,
        ),
        leading_edges: edges(&leading, active_leading),
        trailing_edges: edges(&trailing, active_trailing),
        active_leading: Some(active_leading),
        active_trailing: Some(active_trailing),
    }
}

fn deform_wing_section(template: &TemplateMesh, s: &WingStations) -> DeformedMesh {
    let mut builder = MeshBuilder::with_capacity(template.vertex_count(), false);
    for (&p, &uv) in template.positions.iter().zip(&template.uvs) {
        let leading = p.z < 0.0;
        let width = if p.x < WING_TIP_THRESHOLD {
            s.width_tip
        } else {
            s.width_root
        };
        let u = if leading { width } else { 0.0 };
        builder.vertex(s.place(p), Vec2::new(u, uv.y));
    }
    builder.build()
}

fn deform_wing_surface(
    template: &TemplateMesh,
    s: &WingStations,
    paints: &SurfacePaints,
) -> DeformedMesh {
    let mut builder = MeshBuilder::with_capacity(template.vertex_count(), true);
    for &p in &template.positions {
        let leading = p.z < 0.0;
        let uv = if p.x < WING_TIP_THRESHOLD {
            let u = s.length / 4.0;
            if leading {
                Vec2::new(u, 0.5 + s.width_tip / 8.0 - s.offset_tip / 4.0)
            } else {
                Vec2::new(u, 0.5 - s.width_tip / 8.0 - s.offset_tip / 4.0)
            }
        } else if leading {
            Vec2::new(0.0, 0.5 + (-s.offset_root * 2.0 + s.width_root) / 8.0)
        } else {
            Vec2::new(0.0, 0.5 - (s.offset_root * 2.0 + s.width_root) / 8.0)
        };
        builder.vertex(s.place(p), uv);

        let side = if (p.y > 0.0) != s.mirrored {
            SurfaceSide::Top
        } else {
            SurfaceSide::Bottom
        };
        builder.paint(paint_attributes(side, paints));
    }
    builder.build()
}

struct EdgeSpec {
    side: SurfaceSide,
    depth_root: f32,
    depth_tip: f32,
    painted: bool,
    collides: bool,
}

/// Edge templates are authored for the trailing side; leading edges reuse them
/// reflected across the chord plane.
fn deform_wing_edge(
    template: &TemplateMesh,
    s: &WingStations,
    spec: &EdgeSpec,
    paints: &SurfacePaints,
) -> DeformedMesh {
    let leading = spec.side == SurfaceSide::LeadingEdge;
    let mut builder = MeshBuilder::with_capacity(template.vertex_count(), true);

    for ((&p, &n), &uv) in template
        .positions
        .iter()
        .zip(&template.normals)
        .zip(&template.uvs)
    {
        let along_profile = n.x == 0.0;
        let mut uv = uv;
        let (x, y, z) = if p.x < WING_EDGE_TIP_THRESHOLD {
            if along_profile {
                uv.x = s.length;
            }
            let shift = if leading { -s.offset_tip } else { s.offset_tip };
            (
                -s.length,
                p.y * s.thickness_tip,
                p.z * spec.depth_tip + s.width_tip / 2.0 + shift,
            )
        } else {
            let shift = if leading { -s.offset_root } else { s.offset_root };
            (
                p.x,
                p.y * s.thickness_root,
                p.z * spec.depth_root + s.width_root / 2.0 + shift,
            )
        };
        let z = if leading { -z } else { z };
        builder.vertex(Vec3::new(x, y, z), uv);

        if along_profile && spec.painted {
            builder.paint(paint_attributes(spec.side, paints));
        } else {
            builder.paint(UNPAINTED);
        }
    }
    builder.build()
}

// --- Control surface ---

/// Per-end values of a control surface; root and tip swap on the unmirrored side.
#[derive(Clone, Copy)]
struct ControlStation {
    thickness: f32,
    edge_depth: f32,
    width: f32,
    offset_clamped: f32,
}

struct ControlStations {
    length: f32,
    /// Distance each end moves away from the template's unit span.
    half_gap: f32,
    root: ControlStation,
    tip: ControlStation,
}

impl ControlStations {
    fn new(params: &WingParameters, part: &WingPart, limits: &ParameterLimits) -> Self {
        let r = part.effective_rescale() as f32;
        let m = part.mirrored;
        let pick = |mirrored_value: f64, other: f64| param(if m { mirrored_value } else { other });
        let length = param(params.length) / r;

        let offset_min = limits.offset.min as f32;
        let offset_max = limits.offset.max as f32;
        let offset_root = if m {
            param(params.offset_root)
        } else {
            -param(params.offset_tip)
        };
        let offset_tip = if m {
            param(params.offset_tip)
        } else {
            -param(params.offset_root)
        };
        let root_clamped =
            clamp_soft(offset_root, offset_min, offset_max + CTRL_OFFSET_SLACK) / r;
        let tip_clamped = clamp_soft(
            offset_tip,
            (offset_min - CTRL_OFFSET_SLACK).max(root_clamped - param(params.length)),
            offset_max,
        ) / r;

        Self {
            length,
            half_gap: 0.5 - length / 2.0,
            root: ControlStation {
                thickness: pick(params.thickness_root, params.thickness_tip) / REFERENCE_THICKNESS / r,
                edge_depth: pick(params.edge_width_trailing_root, params.edge_width_trailing_tip)
                    / REFERENCE_THICKNESS
                    / r,
                width: pick(params.width_root, params.width_tip) / r,
                offset_clamped: root_clamped,
            },
            tip: ControlStation {
                thickness: pick(params.thickness_tip, params.thickness_root) / REFERENCE_THICKNESS / r,
                edge_depth: pick(params.edge_width_trailing_tip, params.edge_width_trailing_root)
                    / REFERENCE_THICKNESS
                    / r,
                width: pick(params.width_tip, params.width_root) / r,
                offset_clamped: tip_clamped,
            },
        }
    }

    fn station(&self, tip: bool) -> &ControlStation {
        if tip {
            &self.tip
        } else {
            &self.root
        }
    }

    fn stretch(&self, z: f32, tip: bool) -> f32 {
        if tip {
            z + self.half_gap
        } else {
            z - self.half_gap
        }
    }
}

fn deform_control_surface(
    templates: &TemplateSet,
    params: &WingParameters,
    part: &WingPart,
    limits: &ParameterLimits,
) -> WingMeshes {
    let stations = ControlStations::new(params, part, limits);
    let active = EdgeProfileSelector::CONTROL_SURFACE.select(params.edge_type_trailing, part.mirrored);
    let edge_collides = params.edge_width_trailing_root + params.edge_width_trailing_tip
        > EDGE_COLLISION_MIN_WIDTH;

    let trailing_edges = templates
        .edges
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let mesh = deform_control_edge(template, &stations, &params.paint);
            sub_mesh(mesh, index == active, index == active && edge_collides)
        })
        .collect();

    WingMeshes {
        structure: sub_mesh(deform_control_frame(&templates.structure, &stations), true, true),
        surface: sub_mesh(
            deform_control_skin(&templates.surface, &stations, &params.paint),
            true,
            false,
        ),
        leading_edges: Vec::new(),
        trailing_edges,
        active_leading: None,
        active_trailing: Some(active),
    }
}

/// Shears a vertex along the span by its chordwise depth.
fn apply_offset(p: &mut Vec3, uv: &mut Vec2, station: &ControlStation, shift_uv: bool) {
    p.z += p.y * station.offset_clamped;
    if shift_uv {
        uv.x -= p.y * station.offset_clamped / 4.0;
    }
}

fn deform_control_frame(template: &TemplateMesh, s: &ControlStations) -> DeformedMesh {
    let mut builder = MeshBuilder::with_capacity(template.vertex_count(), false);
    for ((&p, &n), &uv) in template
        .positions
        .iter()
        .zip(&template.normals)
        .zip(&template.uvs)
    {
        let tip = p.z < 0.0;
        let station = s.station(tip);
        let mut p = Vec3::new(p.x * station.thickness, p.y, s.stretch(p.z, tip));
        let mut uv = uv;
        let side = is_side(n);

        if side {
            if uv.y > 0.185 && p.y < -0.01 {
                p.y = -station.width;
                uv.x = station.width;
            }
        } else if is_axis(n, Vec3::Y) && tip {
            uv.x = s.length;
        } else if p.y < -0.1 {
            p.y += 0.5 - station.width;
        }

        apply_offset(&mut p, &mut uv, station, !side);
        builder.vertex(p, uv);
    }
    builder.build()
}

fn deform_control_edge(
    template: &TemplateMesh,
    s: &ControlStations,
    paints: &SurfacePaints,
) -> DeformedMesh {
    let mut builder = MeshBuilder::with_capacity(template.vertex_count(), true);
    for ((&p, &n), &uv) in template
        .positions
        .iter()
        .zip(&template.normals)
        .zip(&template.uvs)
    {
        let tip = p.z < 0.0;
        let station = s.station(tip);
        let mut p = Vec3::new(
            p.x * station.thickness,
            (p.y + 0.5) * station.edge_depth - 0.5,
            s.stretch(p.z, tip),
        );
        let mut uv = uv;
        let side = is_side(n);

        if side || p.y < -0.1 {
            p.y += 0.5 - station.width;
        }
        apply_offset(&mut p, &mut uv, station, !side);

        if !side && !is_axis(n, Vec3::Y) && uv.y < 0.3 {
            uv = Vec2::new(p.z, uv.y);
            builder.vertex(p, uv);
            builder.paint(paint_attributes(SurfaceSide::TrailingEdge, paints));
        } else {
            builder.vertex(p, uv);
            builder.paint(UNPAINTED);
        }
    }
    builder.build()
}

fn deform_control_skin(
    template: &TemplateMesh,
    s: &ControlStations,
    paints: &SurfacePaints,
) -> DeformedMesh {
    let mut builder = MeshBuilder::with_capacity(template.vertex_count(), true);
    for (&p, &uv) in template.positions.iter().zip(&template.uvs) {
        let tip = p.z < 0.0;
        let station = s.station(tip);
        let mut p = Vec3::new(p.x, p.y, s.stretch(p.z, tip));
        let mut uv = Vec2::new(if tip { 0.0 } else { s.length / 4.0 }, uv.y);

        if p.y < -0.1 {
            p.y += 0.5 - station.width;
            uv.y = station.width / 4.0;
        } else {
            uv.y = 0.0;
        }
        p.x *= station.thickness;
        p.z += p.y * station.offset_clamped;
        uv.x += p.y * station.offset_clamped / 4.0;
        builder.vertex(p, uv);

        let side = if p.x > 0.0 {
            SurfaceSide::Top
        } else {
            SurfaceSide::Bottom
        };
        builder.paint(paint_attributes(side, paints));
    }
    builder.build()
}
