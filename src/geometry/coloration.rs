use bevy::prelude::*;

use crate::components::{SurfacePaint, SurfacePaints};

/// Paint channel a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSide {
    Top,
    Bottom,
    TrailingEdge,
    LeadingEdge,
}

impl SurfaceSide {
    pub fn paint(self, paints: &SurfacePaints) -> &SurfacePaint {
        match self {
            SurfaceSide::Top => &paints.top,
            SurfaceSide::Bottom => &paints.bottom,
            SurfaceSide::TrailingEdge => &paints.trailing_edge,
            SurfaceSide::LeadingEdge => &paints.leading_edge,
        }
    }
}

/// Converts hue/saturation/brightness (all 0..=1) to clamped RGB.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [f32; 3] {
    if saturation == 0.0 {
        let v = brightness.clamp(0.0, 1.0);
        return [v, v, v];
    }

    let max = brightness;
    let dif = brightness * saturation;
    let min = brightness - dif;
    let h = hue * 360.0;
    let rise = |from: f32| (h - from) * dif / 60.0 + min;
    let fall = |to: f32| -(h - to) * dif / 60.0 + min;

    let rgb = if h < 60.0 {
        [max, rise(0.0), min]
    } else if h < 120.0 {
        [fall(120.0), max, min]
    } else if h < 180.0 {
        [min, max, rise(120.0)]
    } else if h < 240.0 {
        [min, fall(240.0), max]
    } else if h < 300.0 {
        [rise(240.0), min, max]
    } else if h <= 360.0 {
        [max, min, fall(360.0)]
    } else {
        [0.0, 0.0, 0.0]
    };
    rgb.map(|c| c.clamp(0.0, 1.0))
}

/// RGBA vertex colour of a paint channel; alpha carries the opacity.
pub fn vertex_color(paint: &SurfacePaint) -> [f32; 4] {
    let [r, g, b] = hsb_to_rgb(
        paint.hue as f32,
        paint.saturation as f32,
        paint.brightness as f32,
    );
    let alpha = if paint.opacity.is_finite() {
        paint.opacity as f32
    } else {
        0.0
    };
    [r, g, b, alpha]
}

/// Secondary UV selecting the material layer in the shared atlas.
pub fn vertex_uv2(material: f64) -> Vec2 {
    if material == 0.0 {
        Vec2::new(0.0, 1.0)
    } else {
        Vec2::new(((material - 1.0) / 3.0) as f32, 0.0)
    }
}

/// Colour and secondary UV for one side.
pub fn paint_attributes(side: SurfaceSide, paints: &SurfacePaints) -> ([f32; 4], Vec2) {
    let paint = side.paint(paints);
    (vertex_color(paint), vertex_uv2(paint.material))
}
