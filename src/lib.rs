pub mod components;
pub mod geometry;
pub mod plugins;
pub mod resources;
pub mod systems;

pub use plugins::{DeflectionSyncPlugin, ProcWingPlugin};
