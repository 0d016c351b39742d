use bevy::prelude::*;

use crate::components::{Bounds, WingKind};
use crate::resources::{Result, TemplateError};

/// Number of edge-profile variants per geometry class.
pub const WING_EDGE_VARIANTS: usize = 15;
pub const CONTROL_EDGE_VARIANTS: usize = 7;

/// Undeformed vertex data of one sub-mesh class.
///
/// Vertex tagging is positional and co-designed with the deformer:
///
/// * Wing section, surface and edges: root at `x = 0`, tip at `x = -4`; a vertex is
///   tip-side when `x < -0.05` (`x < -0.1` for edges). Section and surface span
///   `z = ±2` with `z < 0` leading; thickness is `y = ±0.12`. Edges grow from `z = 0`
///   to `z = 0.24`.
/// * Control frame and surface: span `z = ±0.5` (`z < 0` tip side), chord from the
///   hinge at `y = 0` to `y = -0.5`, thickness `x = ±0.12`. Control edges continue
///   from `y = -0.5` to `y = -0.74`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
}

impl TemplateMesh {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.positions)
    }

    pub(crate) fn push(&mut self, position: Vec3, normal: Vec3, uv: Vec2) {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
    }

    /// Checks that every attribute has one entry per vertex.
    pub fn validate(&self, name: &str) -> Result<()> {
        let (positions, normals, uvs) = (self.positions.len(), self.normals.len(), self.uvs.len());
        if positions != normals || positions != uvs {
            return Err(TemplateError::AttributeMismatch {
                name: name.to_string(),
                positions,
                normals,
                uvs,
            });
        }
        Ok(())
    }
}

/// Sub-mesh slot within a geometry class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    /// Wing section or control-surface frame.
    Structure,
    Surface,
    Edge(usize),
}

impl TemplateVariant {
    /// Name of the source object holding this variant.
    pub fn source_name(&self, kind: WingKind) -> String {
        match (self, kind) {
            (TemplateVariant::Structure, WingKind::Wing) => "section".to_string(),
            (TemplateVariant::Structure, WingKind::ControlSurface) => "frame".to_string(),
            (TemplateVariant::Surface, _) => "surface".to_string(),
            (TemplateVariant::Edge(index), _) => format!("edge_type{index}"),
        }
    }
}

pub fn edge_variant_count(kind: WingKind) -> usize {
    match kind {
        WingKind::Wing => WING_EDGE_VARIANTS,
        WingKind::ControlSurface => CONTROL_EDGE_VARIANTS,
    }
}

/// Lookup of template source objects by class and name.
pub trait TemplateSource: Send + Sync {
    fn lookup(&self, kind: WingKind, name: &str) -> Result<TemplateMesh>;
}

/// Record of a template that could not be captured.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDiagnostic {
    pub kind: WingKind,
    pub variant: TemplateVariant,
    pub message: String,
}

/// Frozen templates of one geometry class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSet {
    pub structure: TemplateMesh,
    pub surface: TemplateMesh,
    pub edges: Vec<TemplateMesh>,
}

impl TemplateSet {
    /// Captures every variant of `kind`. Missing or malformed sources become empty
    /// templates and a diagnostic; the rest of the class is still captured.
    pub fn capture(
        kind: WingKind,
        source: &dyn TemplateSource,
        diagnostics: &mut Vec<TemplateDiagnostic>,
    ) -> Self {
        let mut fetch = |variant: TemplateVariant| {
            let name = variant.source_name(kind);
            let captured = source
                .lookup(kind, &name)
                .and_then(|mesh| mesh.validate(&name).map(|_| mesh));
            match captured {
                Ok(mesh) => mesh,
                Err(err) => {
                    warn!("Template capture degraded for {:?}/{}: {}", kind, name, err);
                    diagnostics.push(TemplateDiagnostic {
                        kind,
                        variant,
                        message: err.to_string(),
                    });
                    TemplateMesh::empty()
                }
            }
        };

        let structure = fetch(TemplateVariant::Structure);
        let surface = fetch(TemplateVariant::Surface);
        let edges = (0..edge_variant_count(kind))
            .map(|index| fetch(TemplateVariant::Edge(index)))
            .collect();

        Self {
            structure,
            surface,
            edges,
        }
    }

    pub fn get(&self, variant: TemplateVariant) -> Option<&TemplateMesh> {
        match variant {
            TemplateVariant::Structure => Some(&self.structure),
            TemplateVariant::Surface => Some(&self.surface),
            TemplateVariant::Edge(index) => self.edges.get(index),
        }
    }
}
