use crate::components::WingKind;
use crate::geometry::template::edge_variant_count;

/// Maps a continuous 1-based shape value onto a discrete edge-profile variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeProfileSelector {
    pub count: usize,
    /// Whether mirrored parts swap asymmetric variant pairs.
    pub mirror_pairs: bool,
}

impl EdgeProfileSelector {
    pub const WING: Self = Self {
        count: 15,
        mirror_pairs: true,
    };
    pub const CONTROL_SURFACE: Self = Self {
        count: 7,
        mirror_pairs: false,
    };

    pub fn for_kind(kind: WingKind) -> Self {
        let selector = match kind {
            WingKind::Wing => Self::WING,
            WingKind::ControlSurface => Self::CONTROL_SURFACE,
        };
        debug_assert_eq!(selector.count, edge_variant_count(kind));
        selector
    }

    /// Zero-based variant for `shape`, clamped into range.
    pub fn index(&self, shape: f64) -> usize {
        profile_index(shape, self.count)
    }

    /// Variant actually shown on a part, after the mirrored-pair swap.
    pub fn select(&self, shape: f64, mirrored: bool) -> usize {
        let index = self.index(shape);
        if mirrored && self.mirror_pairs {
            mirrored_pair(index)
        } else {
            index
        }
    }
}

/// `round(shape - 1)`, ties to even, clamped to `0..count`. Non-finite shapes
/// select variant 0.
pub fn profile_index(shape: f64, count: usize) -> usize {
    if !shape.is_finite() || count == 0 {
        return 0;
    }
    let index = (shape - 1.0).round_ties_even().max(0.0) as usize;
    index.min(count - 1)
}

/// Swaps the asymmetric bevel, half-round and step pairs so mirrored parts keep
/// left/right symmetry. Other variants map to themselves.
pub fn mirrored_pair(index: usize) -> usize {
    match index {
        9 | 11 | 13 => index + 1,
        10 | 12 | 14 => index - 1,
        _ => index,
    }
}
