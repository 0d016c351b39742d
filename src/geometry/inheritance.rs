use serde::{Deserialize, Serialize};

use crate::components::{WingParameters, WingPart};
use crate::resources::ParameterLimits;

/// What a part copies from the wing it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InheritMode {
    /// Base plus extrapolated tip width, offset and thickness.
    Shape,
    /// Root continues the parent's tip.
    Base,
    Edges,
    Paint,
    /// Aligns a control surface's hinge with the parent's leading or trailing edge.
    ControlOffset { back: bool },
}

/// Applies `mode` from `parent` onto `child`. Returns false when the pairing does not
/// support it (shape modes need two wings, control offsets a wing parent and a
/// control-surface child) or the parent has no span to extrapolate along.
pub fn inherit(
    child: &mut WingParameters,
    child_part: &WingPart,
    parent: &WingParameters,
    parent_part: &WingPart,
    mode: InheritMode,
    limits: &ParameterLimits,
) -> bool {
    if parent_part.is_control_surface() {
        return false;
    }
    let both_wings = !child_part.is_control_surface();
    let has_span = parent.length > 0.0 && parent.length.is_finite();

    match mode {
        InheritMode::Base if both_wings => {
            inherit_base(child, parent);
            true
        }
        InheritMode::Edges if both_wings && has_span => {
            inherit_edges(child, parent, limits);
            true
        }
        InheritMode::Shape if both_wings && has_span => {
            inherit_shape(child, parent, limits);
            true
        }
        InheritMode::Paint => {
            child.paint = parent.paint;
            true
        }
        InheritMode::ControlOffset { back } if !both_wings && has_span => {
            inherit_control_offset(child, parent, back);
            true
        }
        _ => false,
    }
}

fn inherit_base(child: &mut WingParameters, parent: &WingParameters) {
    child.width_root = parent.width_tip;
    child.thickness_root = parent.thickness_tip;
    child.offset_root = -parent.offset_tip;
    child.edge_type_leading = parent.edge_type_leading;
    child.edge_width_leading_root = parent.edge_width_leading_tip;
    child.edge_type_trailing = parent.edge_type_trailing;
    child.edge_width_trailing_root = parent.edge_width_trailing_tip;
}

/// Continues the parent's root-to-tip trend over the child's span.
fn extrapolate(child_root: f64, parent_root: f64, parent_tip: f64, parent_len: f64, len: f64) -> f64 {
    child_root + (parent_tip - parent_root) / parent_len * len
}

fn inherit_edges(child: &mut WingParameters, parent: &WingParameters, limits: &ParameterLimits) {
    let (p_len, len) = (parent.length, child.length);

    child.edge_type_leading = parent.edge_type_leading;
    child.edge_width_leading_root = parent.edge_width_leading_tip;
    child.edge_width_leading_tip = limits.edge_width.clamp(extrapolate(
        child.edge_width_leading_root,
        parent.edge_width_leading_root,
        parent.edge_width_leading_tip,
        p_len,
        len,
    ));

    child.edge_type_trailing = parent.edge_type_trailing;
    child.edge_width_trailing_root = parent.edge_width_trailing_tip;
    child.edge_width_trailing_tip = limits.edge_width.clamp(extrapolate(
        child.edge_width_trailing_root,
        parent.edge_width_trailing_root,
        parent.edge_width_trailing_tip,
        p_len,
        len,
    ));
}

fn inherit_shape(child: &mut WingParameters, parent: &WingParameters, limits: &ParameterLimits) {
    inherit_base(child, parent);
    let (p_len, len) = (parent.length, child.length);

    child.width_tip = limits.width_tip.clamp(extrapolate(
        child.width_root,
        parent.width_root,
        parent.width_tip,
        p_len,
        len,
    ));
    child.offset_tip = limits.offset.clamp(len / p_len * parent.offset_tip);
    child.thickness_tip = limits.thickness.clamp(extrapolate(
        child.thickness_root,
        parent.thickness_root,
        parent.thickness_tip,
        p_len,
        len,
    ));
}

fn inherit_control_offset(child: &mut WingParameters, parent: &WingParameters, back: bool) {
    let sweep = if back {
        parent.offset_tip
    } else {
        -parent.offset_tip
    };
    let offset = (sweep + parent.width_tip / 2.0 - parent.width_root / 2.0) / parent.length;
    child.offset_root = offset;
    child.offset_tip = offset;
}
