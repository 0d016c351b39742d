use bevy::prelude::*;
use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use super::template::{edge_variant_count, TemplateMesh, TemplateSource};
use crate::components::WingKind;
use crate::resources::{Result, TemplateError};

const WING_SPAN: f32 = 4.0;
const WING_HALF_CHORD: f32 = 2.0;
const HALF_THICKNESS: f32 = 0.12;
const EDGE_DEPTH: f32 = 0.24;
const CTRL_HALF_SPAN: f32 = 0.5;
const CTRL_CHORD: f32 = 0.5;

/// Generates the reference templates in code instead of reading model assets.
///
/// Names can be withheld to emulate an incomplete asset.
#[derive(Debug, Clone, Default)]
pub struct ProceduralTemplateSource {
    withheld: HashSet<(WingKind, String)>,
}

impl ProceduralTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(mut self, kind: WingKind, name: &str) -> Self {
        self.withheld.insert((kind, name.to_string()));
        self
    }
}

impl TemplateSource for ProceduralTemplateSource {
    fn lookup(&self, kind: WingKind, name: &str) -> Result<TemplateMesh> {
        let missing = || TemplateError::MissingSource {
            kind,
            name: name.to_string(),
        };
        if self.withheld.contains(&(kind, name.to_string())) {
            return Err(missing());
        }

        match (kind, name) {
            (WingKind::Wing, "section") => Ok(wing_section()),
            (WingKind::Wing, "surface") => Ok(wing_surface()),
            (WingKind::ControlSurface, "frame") => Ok(control_frame()),
            (WingKind::ControlSurface, "surface") => Ok(control_surface()),
            (_, other) => {
                let index = other
                    .strip_prefix("edge_type")
                    .and_then(|n| n.parse::<usize>().ok())
                    .filter(|&i| i < edge_variant_count(kind))
                    .ok_or_else(missing)?;
                Ok(match kind {
                    WingKind::Wing => wing_edge(index),
                    WingKind::ControlSurface => control_edge(index),
                })
            }
        }
    }
}

fn quad(mesh: &mut TemplateMesh, corners: [Vec3; 4], uvs: [Vec2; 4], normal: Vec3) {
    for (corner, uv) in corners.into_iter().zip(uvs) {
        mesh.push(corner, normal, uv);
    }
}

fn wing_box(mesh: &mut TemplateMesh, faces: &[Vec3]) {
    let (x0, x1) = (0.0, -WING_SPAN);
    let (y0, y1) = (HALF_THICKNESS, -HALF_THICKNESS);
    let (z0, z1) = (-WING_HALF_CHORD, WING_HALF_CHORD);
    let span_uv = |x: f32| -x / WING_SPAN;
    let chord_uv = |z: f32| (z - z0) / (z1 - z0);

    for &normal in faces {
        let corners = if normal == Vec3::Y || normal == Vec3::NEG_Y {
            let y = if normal == Vec3::Y { y0 } else { y1 };
            [
                Vec3::new(x0, y, z0),
                Vec3::new(x1, y, z0),
                Vec3::new(x1, y, z1),
                Vec3::new(x0, y, z1),
            ]
        } else if normal == Vec3::Z || normal == Vec3::NEG_Z {
            let z = if normal == Vec3::Z { z1 } else { z0 };
            [
                Vec3::new(x0, y0, z),
                Vec3::new(x1, y0, z),
                Vec3::new(x1, y1, z),
                Vec3::new(x0, y1, z),
            ]
        } else {
            let x = if normal == Vec3::X { x0 } else { x1 };
            [
                Vec3::new(x, y0, z0),
                Vec3::new(x, y0, z1),
                Vec3::new(x, y1, z1),
                Vec3::new(x, y1, z0),
            ]
        };
        let uvs = corners.map(|c| Vec2::new(span_uv(c.x), chord_uv(c.z)));
        quad(mesh, corners, uvs, normal);
    }
}

fn wing_section() -> TemplateMesh {
    let mut mesh = TemplateMesh::empty();
    wing_box(
        &mut mesh,
        &[Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z, Vec3::X, Vec3::NEG_X],
    );
    mesh
}

fn wing_surface() -> TemplateMesh {
    let mut mesh = TemplateMesh::empty();
    wing_box(&mut mesh, &[Vec3::Y, Vec3::NEG_Y]);
    mesh
}

/// Cross-section of an edge profile as (thickness, depth) points, running from the
/// upper attachment point around the edge to the lower one.
pub(crate) fn edge_profile(index: usize) -> Vec<Vec2> {
    let t = HALF_THICKNESS;
    let d = EDGE_DEPTH;
    let snap = |v: f32| if v.abs() < 1e-6 { 0.0 } else { v };
    let arc = |from: f32, to: f32, steps: usize, depth: f32| -> Vec<Vec2> {
        (0..=steps)
            .map(|i| {
                let angle = from + (to - from) * i as f32 / steps as f32;
                Vec2::new(snap(t * angle.sin()), snap(depth * angle.cos()))
            })
            .collect()
    };

    match index {
        // Type 1: no edge, collapsed onto the attachment line.
        0 => vec![Vec2::new(t, 0.0), Vec2::new(-t, 0.0)],
        1 => arc(FRAC_PI_2, -FRAC_PI_2, 8, d),
        2 => vec![Vec2::new(t, 0.0), Vec2::new(0.0, d), Vec2::new(-t, 0.0)],
        3 => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t, d),
            Vec2::new(-t, d),
            Vec2::new(-t, 0.0),
        ],
        4 => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t * 0.2, d),
            Vec2::new(-t * 0.2, d),
            Vec2::new(-t, 0.0),
        ],
        5 => arc(FRAC_PI_2, -FRAC_PI_2, 4, d * 0.5)
            .into_iter()
            .map(|p| Vec2::new(p.x, p.y * 2.0 * (1.0 - 0.5 * (p.x / t).abs())))
            .collect(),
        6 => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t * 0.5, d * 0.5),
            Vec2::new(0.0, d),
            Vec2::new(-t * 0.5, d * 0.5),
            Vec2::new(-t, 0.0),
        ],
        7 => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t, d * 0.5),
            Vec2::new(0.0, d),
            Vec2::new(-t, d * 0.5),
            Vec2::new(-t, 0.0),
        ],
        8 => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t * 0.6, d * 0.8),
            Vec2::new(0.0, d),
            Vec2::new(-t * 0.6, d * 0.8),
            Vec2::new(-t, 0.0),
        ],
        // Asymmetric pairs: bevel, half-round, step. Odd member faces up.
        9 => vec![Vec2::new(t, 0.0), Vec2::new(t, d), Vec2::new(-t, 0.0)],
        10 => vec![Vec2::new(t, 0.0), Vec2::new(-t, d), Vec2::new(-t, 0.0)],
        11 => {
            let mut points = arc(FRAC_PI_2, 0.0, 6, d);
            points.push(Vec2::new(-t, 0.0));
            points
        }
        12 => {
            let mut points = vec![Vec2::new(t, 0.0)];
            points.extend(arc(0.0, -FRAC_PI_2, 6, d));
            points
        }
        13 => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t, d),
            Vec2::new(0.0, d),
            Vec2::new(0.0, d * 0.5),
            Vec2::new(-t, d * 0.5),
            Vec2::new(-t, 0.0),
        ],
        _ => vec![
            Vec2::new(t, 0.0),
            Vec2::new(t, d * 0.5),
            Vec2::new(0.0, d * 0.5),
            Vec2::new(0.0, d),
            Vec2::new(-t, d),
            Vec2::new(-t, 0.0),
        ],
    }
}

/// Outward normal of a profile segment in (thickness, depth) space.
fn segment_normal(from: Vec2, to: Vec2) -> Vec2 {
    let tangent = to - from;
    Vec2::new(tangent.y, -tangent.x)
        .try_normalize()
        .unwrap_or(Vec2::Y)
}

fn arc_fractions(profile: &[Vec2]) -> Vec<f32> {
    let lengths: Vec<f32> = profile.windows(2).map(|w| w[0].distance(w[1])).collect();
    let total: f32 = lengths.iter().sum();
    let mut acc = 0.0;
    let mut fractions = vec![0.0];
    for length in lengths {
        acc += length;
        fractions.push(if total > 0.0 { acc / total } else { 0.0 });
    }
    fractions
}

/// Extrudes an edge profile between two span stations and caps both ends.
///
/// `place` maps (thickness, depth, station) to a position; `orient` maps a profile
/// normal to 3D; `cap_normal` gives the outward cap normal for each station.
fn extrude_edge(
    profile: &[Vec2],
    stations: [f32; 2],
    place: impl Fn(Vec2, f32) -> Vec3,
    orient: impl Fn(Vec2) -> Vec3,
    cap_normals: [Vec3; 2],
    uv_scale: f32,
) -> TemplateMesh {
    let mut mesh = TemplateMesh::empty();
    let fractions = arc_fractions(profile);

    for (i, pair) in profile.windows(2).enumerate() {
        let normal = orient(segment_normal(pair[0], pair[1]));
        for (&station, span_uv) in stations.iter().zip([0.0, 1.0]) {
            mesh.push(
                place(pair[0], station),
                normal,
                Vec2::new(span_uv, fractions[i] * uv_scale),
            );
            mesh.push(
                place(pair[1], station),
                normal,
                Vec2::new(span_uv, fractions[i + 1] * uv_scale),
            );
        }
    }
    for (&station, normal) in stations.iter().zip(cap_normals) {
        for point in profile {
            mesh.push(place(*point, station), normal, Vec2::new(0.5, 0.5));
        }
    }
    mesh
}

fn wing_edge(index: usize) -> TemplateMesh {
    extrude_edge(
        &edge_profile(index),
        [0.0, -WING_SPAN],
        |p, x| Vec3::new(x, p.x, p.y),
        |n| Vec3::new(0.0, n.x, n.y),
        [Vec3::X, Vec3::NEG_X],
        1.0,
    )
}

fn control_edge(index: usize) -> TemplateMesh {
    extrude_edge(
        &edge_profile(index),
        [CTRL_HALF_SPAN, -CTRL_HALF_SPAN],
        |p, z| Vec3::new(p.x, -CTRL_CHORD - p.y, z),
        |n| Vec3::new(n.x, -n.y, 0.0),
        [Vec3::Z, Vec3::NEG_Z],
        0.25,
    )
}

fn control_frame() -> TemplateMesh {
    let mut mesh = TemplateMesh::empty();
    let (t, c, s) = (HALF_THICKNESS, -CTRL_CHORD, CTRL_HALF_SPAN);
    let chord_uv = |y: f32| if y < 0.0 { 0.25 } else { 0.0 };
    let faces = [
        (
            Vec3::NEG_Z,
            [
                Vec3::new(t, 0.0, -s),
                Vec3::new(t, c, -s),
                Vec3::new(-t, c, -s),
                Vec3::new(-t, 0.0, -s),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(t, 0.0, s),
                Vec3::new(-t, 0.0, s),
                Vec3::new(-t, c, s),
                Vec3::new(t, c, s),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(t, 0.0, -s),
                Vec3::new(-t, 0.0, -s),
                Vec3::new(-t, 0.0, s),
                Vec3::new(t, 0.0, s),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(t, c, -s),
                Vec3::new(t, c, s),
                Vec3::new(-t, c, s),
                Vec3::new(-t, c, -s),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(t, 0.0, -s),
                Vec3::new(t, 0.0, s),
                Vec3::new(t, c, s),
                Vec3::new(t, c, -s),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-t, 0.0, -s),
                Vec3::new(-t, c, -s),
                Vec3::new(-t, c, s),
                Vec3::new(-t, 0.0, s),
            ],
        ),
    ];
    for (normal, corners) in faces {
        let uvs = corners.map(|p| Vec2::new((p.z + s) / (2.0 * s), chord_uv(p.y)));
        quad(&mut mesh, corners, uvs, normal);
    }
    mesh
}

fn control_surface() -> TemplateMesh {
    let mut mesh = TemplateMesh::empty();
    let (t, c, s) = (HALF_THICKNESS, -CTRL_CHORD, CTRL_HALF_SPAN);
    for (normal, x) in [(Vec3::X, t), (Vec3::NEG_X, -t)] {
        let corners = [
            Vec3::new(x, 0.0, -s),
            Vec3::new(x, c, -s),
            Vec3::new(x, c, s),
            Vec3::new(x, 0.0, s),
        ];
        let uvs = corners.map(|p| Vec2::new((p.z + s) / (2.0 * s), -p.y));
        quad(&mut mesh, corners, uvs, normal);
    }
    mesh
}
