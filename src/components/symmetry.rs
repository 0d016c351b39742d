use bevy::prelude::*;

/// Mirrored copies driven by this (primary) part.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct SymmetryGroup {
    pub counterparts: Vec<Entity>,
}

impl SymmetryGroup {
    pub fn new(counterparts: Vec<Entity>) -> Self {
        Self { counterparts }
    }
}
