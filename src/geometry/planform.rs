use serde::{Deserialize, Serialize};

use crate::components::WingParameters;

/// Which sweep angle the user is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepEdge {
    Leading,
    Trailing,
}

/// Lock preferences for solving a planform from sweep angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepMode {
    /// Keep the root width; the tip width absorbs the change.
    pub lock_root_width: bool,
    /// Solve for the root offset instead of the tip offset.
    pub lock_root_offset: bool,
    /// Only the edited angle moves; widths are left alone.
    pub single_angle: bool,
    /// Angles are measured along the outside of the edge pieces.
    pub include_edges: bool,
}

/// Leading and trailing sweep angles in degrees, in `[0, 180)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAngles {
    pub front: f64,
    pub back: f64,
}

fn fold_angle(radians: f64) -> f64 {
    let degrees = radians.to_degrees();
    if degrees < 0.0 {
        degrees + 180.0
    } else {
        degrees
    }
}

pub fn calc_angle_front(params: &WingParameters, include_edges: bool) -> f64 {
    let edges = if include_edges {
        params.edge_width_leading_root - params.edge_width_leading_tip
    } else {
        0.0
    };
    fold_angle(
        (params.length
            / (params.width_root / 2.0 - params.width_tip / 2.0
                + params.offset_tip
                + params.offset_root
                + edges))
            .atan(),
    )
}

pub fn calc_angle_back(params: &WingParameters, include_edges: bool) -> f64 {
    let edges = if include_edges {
        params.edge_width_trailing_tip - params.edge_width_trailing_root
    } else {
        0.0
    };
    fold_angle(
        (params.length
            / (-params.width_root / 2.0 + params.width_tip / 2.0
                + params.offset_tip
                + params.offset_root
                + edges))
            .atan(),
    )
}

pub fn calc_sweep_angles(params: &WingParameters, include_edges: bool) -> SweepAngles {
    SweepAngles {
        front: calc_angle_front(params, include_edges),
        back: calc_angle_back(params, include_edges),
    }
}

/// Rewrites widths and offsets so the base planform matches `angles`.
pub fn apply_sweep_angles(
    params: &mut WingParameters,
    angles: SweepAngles,
    edited: SweepEdge,
    mode: SweepMode,
) {
    let len = params.length;
    let (front, back) = if mode.include_edges {
        let front = (len
            / (len / angles.front.to_radians().tan()
                - (params.edge_width_leading_root - params.edge_width_leading_tip)))
            .atan();
        let back = (len
            / (len / angles.back.to_radians().tan()
                + (params.edge_width_trailing_root - params.edge_width_trailing_tip)))
            .atan();
        (front, back)
    } else {
        (angles.front.to_radians(), angles.back.to_radians())
    };
    // Chordwise run of each edge over the span.
    let run_front = len / front.tan();
    let run_back = len / back.tan();

    if !mode.single_angle {
        if mode.lock_root_width {
            params.width_root = params.width_tip + run_front - run_back;
        } else {
            params.width_tip = params.width_root - run_front + run_back;
        }
    }

    let half_spread = params.width_root / 2.0 - params.width_tip / 2.0;
    // Sum of root and tip offsets that satisfies the angles.
    let offset_sum = match (mode.single_angle, edited) {
        (true, SweepEdge::Leading) => run_front - half_spread,
        (true, SweepEdge::Trailing) => run_back + half_spread,
        (false, _) => (run_front + run_back) / 2.0,
    };
    if mode.lock_root_offset {
        params.offset_root = offset_sum - params.offset_tip;
    } else {
        params.offset_tip = offset_sum - params.offset_root;
    }

    fold_degenerate_widths(params, edited, mode);
}

/// Clamps negative widths produced by extreme angles to zero, moving the excess
/// into an offset (or the tip edge when angles include edges).
pub fn fold_degenerate_widths(params: &mut WingParameters, edited: SweepEdge, mode: SweepMode) {
    if params.width_root < 0.0 {
        let half = params.width_root / 2.0;
        let offset = if mode.lock_root_offset {
            &mut params.offset_root
        } else {
            &mut params.offset_tip
        };
        match edited {
            SweepEdge::Leading => *offset -= half,
            SweepEdge::Trailing => *offset += half,
        }
        params.width_root = 0.0;
    }

    if params.width_tip < 0.0 {
        let half = params.width_tip / 2.0;
        params.width_tip = 0.0;
        match (edited, mode.include_edges) {
            (SweepEdge::Leading, true) => {
                params.edge_width_leading_tip += half;
                if params.edge_width_leading_tip < 0.0 {
                    params.offset_tip -= params.edge_width_leading_tip;
                    params.edge_width_leading_tip = 0.0;
                }
            }
            (SweepEdge::Leading, false) => params.offset_tip -= half,
            (SweepEdge::Trailing, true) => {
                params.edge_width_trailing_tip += half;
                if params.edge_width_trailing_tip < 0.0 {
                    params.offset_tip += params.edge_width_trailing_tip;
                    params.edge_width_trailing_tip = 0.0;
                }
            }
            (SweepEdge::Trailing, false) => params.offset_tip += half,
        }
    }
}
