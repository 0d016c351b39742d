use bevy::prelude::*;

use crate::components::WingKind;
use crate::geometry::{
    ProceduralTemplateSource, TemplateDiagnostic, TemplateMesh, TemplateSet, TemplateSource,
    TemplateVariant,
};

/// Process-wide store of undeformed templates.
///
/// Each geometry class is captured from the source the first time it is requested
/// and frozen afterwards; later requests never touch the source again.
#[derive(Resource)]
pub struct TemplateMeshCache {
    source: Box<dyn TemplateSource>,
    wing: Option<TemplateSet>,
    control_surface: Option<TemplateSet>,
    diagnostics: Vec<TemplateDiagnostic>,
}

impl Default for TemplateMeshCache {
    fn default() -> Self {
        Self::new(ProceduralTemplateSource::new())
    }
}

impl TemplateMeshCache {
    pub fn new(source: impl TemplateSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            wing: None,
            control_surface: None,
            diagnostics: Vec::new(),
        }
    }

    /// Templates of `kind`, capturing them on first use.
    pub fn get(&mut self, kind: WingKind) -> &TemplateSet {
        let Self {
            source,
            wing,
            control_surface,
            diagnostics,
        } = self;
        let slot = match kind {
            WingKind::Wing => wing,
            WingKind::ControlSurface => control_surface,
        };
        slot.get_or_insert_with(|| {
            let before = diagnostics.len();
            let set = TemplateSet::capture(kind, source.as_ref(), diagnostics);
            info!(
                "Captured {:?} templates ({} edge variants, {} degraded)",
                kind,
                set.edges.len(),
                diagnostics.len() - before
            );
            set
        })
    }

    /// Copy of one template variant; callers are free to mutate it.
    pub fn get_template(&mut self, kind: WingKind, variant: TemplateVariant) -> TemplateMesh {
        self.get(kind).get(variant).cloned().unwrap_or_default()
    }

    pub fn is_loaded(&self, kind: WingKind) -> bool {
        match kind {
            WingKind::Wing => self.wing.is_some(),
            WingKind::ControlSurface => self.control_surface.is_some(),
        }
    }

    pub fn diagnostics(&self) -> &[TemplateDiagnostic] {
        &self.diagnostics
    }
}
