mod adapter;
mod aggregation;
mod commit;
mod derivation;

pub use adapter::{publish_aero_adapter_system, stock_fallback_system};
pub use aggregation::{children_lift, propagate_children_lift};
pub use commit::aero_commit_system;
pub use derivation::{
    aero_derivation_system, apply_children_lift, aspect_ratio_sweep_scale, chord_sums,
    connection_force, derive_profile, pseudotaper_ratio, ChordSums,
};
