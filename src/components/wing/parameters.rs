use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::WingKind;
use crate::resources::ParameterLimits;

/// Paint channel of one surface group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePaint {
    /// Material layer, 0..=4.
    pub material: f64,
    pub opacity: f64,
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl SurfacePaint {
    pub fn new(material: f64) -> Self {
        Self {
            material,
            opacity: 0.0,
            hue: 0.1,
            saturation: 0.75,
            brightness: 0.6,
        }
    }

    fn clamp_to(&mut self, limits: &ParameterLimits) {
        self.material = limits.material.clamp(self.material);
        self.opacity = limits.color.clamp(self.opacity);
        self.hue = limits.color.clamp(self.hue);
        self.saturation = limits.color.clamp(self.saturation);
        self.brightness = limits.color.clamp(self.brightness);
    }
}

/// Paint for the four surface groups of a part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePaints {
    pub top: SurfacePaint,
    pub bottom: SurfacePaint,
    pub trailing_edge: SurfacePaint,
    pub leading_edge: SurfacePaint,
}

impl Default for SurfacePaints {
    fn default() -> Self {
        Self {
            top: SurfacePaint::new(1.0),
            bottom: SurfacePaint::new(4.0),
            trailing_edge: SurfacePaint::new(4.0),
            leading_edge: SurfacePaint::new(4.0),
        }
    }
}

/// Authoritative shape parameters of one wing or control-surface part.
///
/// Lengths are in metres before the part's rescale factor is applied. Edge types are
/// 1-based continuous selectors (1 means "no edge").
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingParameters {
    pub length: f64,
    pub width_root: f64,
    pub width_tip: f64,
    pub thickness_root: f64,
    pub thickness_tip: f64,
    pub offset_root: f64,
    pub offset_tip: f64,
    pub edge_type_leading: f64,
    pub edge_type_trailing: f64,
    pub edge_width_leading_root: f64,
    pub edge_width_leading_tip: f64,
    pub edge_width_trailing_root: f64,
    pub edge_width_trailing_tip: f64,
    pub paint: SurfacePaints,
    pub armor_ratio: f64,
}

impl Default for WingParameters {
    fn default() -> Self {
        Self::default_for(WingKind::Wing)
    }
}

impl WingParameters {
    /// Baseline parameters for a geometry class.
    pub fn default_for(kind: WingKind) -> Self {
        let (length, width, edge_leading, edge_trailing) = match kind {
            WingKind::Wing => (4.0, 4.0, 2.0, 3.0),
            WingKind::ControlSurface => (1.0, 0.5, 1.0, 2.0),
        };
        Self {
            length,
            width_root: width,
            width_tip: width,
            thickness_root: 0.24,
            thickness_tip: 0.24,
            offset_root: 0.0,
            offset_tip: 0.0,
            edge_type_leading: edge_leading,
            edge_type_trailing: edge_trailing,
            edge_width_leading_root: 0.24,
            edge_width_leading_tip: 0.24,
            edge_width_trailing_root: 0.48,
            edge_width_trailing_tip: 0.48,
            paint: SurfacePaints::default(),
            armor_ratio: 100.0,
        }
    }

    /// Compares against a previous snapshot and reports which pipelines need a rerun.
    pub fn diff(&self, previous: &WingParameters) -> ParameterChanges {
        let aero = self.length != previous.length
            || self.width_root != previous.width_root
            || self.width_tip != previous.width_tip
            || self.thickness_root != previous.thickness_root
            || self.thickness_tip != previous.thickness_tip
            || self.offset_root != previous.offset_root
            || self.offset_tip != previous.offset_tip
            || self.edge_type_leading != previous.edge_type_leading
            || self.edge_type_trailing != previous.edge_type_trailing
            || self.edge_width_leading_root != previous.edge_width_leading_root
            || self.edge_width_leading_tip != previous.edge_width_leading_tip
            || self.edge_width_trailing_root != previous.edge_width_trailing_root
            || self.edge_width_trailing_tip != previous.edge_width_trailing_tip;
        let cosmetic = self.paint != previous.paint || self.armor_ratio != previous.armor_ratio;
        ParameterChanges {
            geometry: aero || cosmetic,
            aero,
        }
    }

    /// Clamps every field into `limits`. Returns true if anything moved.
    pub fn clamp_to(&mut self, limits: &ParameterLimits) -> bool {
        let before = self.clone();
        self.length = limits.length.clamp(self.length);
        self.width_root = limits.width_root.clamp(self.width_root);
        self.width_tip = limits.width_tip.clamp(self.width_tip);
        self.thickness_root = limits.thickness.clamp(self.thickness_root);
        self.thickness_tip = limits.thickness.clamp(self.thickness_tip);
        self.offset_root = limits.offset.clamp(self.offset_root);
        self.offset_tip = limits.offset.clamp(self.offset_tip);
        self.edge_type_leading = limits.edge_type.clamp(self.edge_type_leading);
        self.edge_type_trailing = limits.edge_type.clamp(self.edge_type_trailing);
        self.edge_width_leading_root = limits.edge_width.clamp(self.edge_width_leading_root);
        self.edge_width_leading_tip = limits.edge_width.clamp(self.edge_width_leading_tip);
        self.edge_width_trailing_root = limits.edge_width.clamp(self.edge_width_trailing_root);
        self.edge_width_trailing_tip = limits.edge_width.clamp(self.edge_width_trailing_tip);
        self.paint.top.clamp_to(limits);
        self.paint.bottom.clamp_to(limits);
        self.paint.trailing_edge.clamp_to(limits);
        self.paint.leading_edge.clamp_to(limits);
        self.armor_ratio = limits.armor.clamp(self.armor_ratio);
        *self != before
    }

    /// Leading edge present (type 1 means none).
    pub fn has_leading_edge(&self) -> bool {
        self.edge_type_leading != 1.0
    }

    pub fn has_trailing_edge(&self) -> bool {
        self.edge_type_trailing != 1.0
    }
}

/// Which pipelines a parameter edit invalidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterChanges {
    pub geometry: bool,
    pub aero: bool,
}

impl ParameterChanges {
    pub fn any(&self) -> bool {
        self.geometry || self.aero
    }
}

/// Last-seen copy of [`WingParameters`] used for dirty detection.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct ParameterShadow(pub WingParameters);

/// Pending recomputation for a part. Cleared by the pipeline stage that consumes it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildFlags {
    pub geometry: bool,
    pub aero: bool,
}

impl Default for RebuildFlags {
    /// New parts build everything on their first tick.
    fn default() -> Self {
        Self {
            geometry: true,
            aero: true,
        }
    }
}

impl RebuildFlags {
    pub fn mark(&mut self, changes: ParameterChanges) {
        self.geometry |= changes.geometry;
        self.aero |= changes.aero;
    }
}
