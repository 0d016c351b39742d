mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_meshes_valid, assert_profile_valid};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
