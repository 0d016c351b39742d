//! Pure geometric algorithms over wing parameters and template meshes.

pub mod coloration;
pub mod deformer;
pub mod edge_profile;
pub mod inheritance;
pub mod planform;
pub mod procedural;
pub mod template;

pub use coloration::{hsb_to_rgb, paint_attributes, vertex_color, vertex_uv2, SurfaceSide};
pub use deformer::deform;
pub use edge_profile::{mirrored_pair, profile_index, EdgeProfileSelector};
pub use inheritance::{inherit, InheritMode};
pub use planform::{
    apply_sweep_angles, calc_angle_back, calc_angle_front, calc_sweep_angles,
    fold_degenerate_widths, SweepAngles, SweepEdge, SweepMode,
};
pub use procedural::ProceduralTemplateSource;
pub use template::{
    edge_variant_count, TemplateDiagnostic, TemplateMesh, TemplateSet, TemplateSource,
    TemplateVariant, CONTROL_EDGE_VARIANTS, WING_EDGE_VARIANTS,
};
