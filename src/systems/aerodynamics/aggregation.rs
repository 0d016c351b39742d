use bevy::prelude::*;

use super::derivation::apply_children_lift;
use crate::components::AerodynamicProfile;
use crate::resources::AeroConstants;

/// Sum of `cl + children_cl` over the direct children of `entity` that carry a
/// profile. Children are looked up fresh on every call.
pub fn children_lift(
    entity: Entity,
    children: &Query<&Children>,
    profiles: &Query<&mut AerodynamicProfile>,
) -> f64 {
    let Ok(direct) = children.get(entity) else {
        return 0.0;
    };
    direct
        .iter()
        .filter_map(|child| profiles.get(*child).ok())
        .map(|profile| profile.cl + profile.children_cl)
        .sum()
}

/// Walks up from `entity` while the parent carries a profile, refreshing each
/// ancestor's aggregated child lift and connection force. Returns the number of
/// ancestors updated.
pub fn propagate_children_lift(
    entity: Entity,
    parents: &Query<&Parent>,
    children: &Query<&Children>,
    profiles: &mut Query<&mut AerodynamicProfile>,
    constants: &AeroConstants,
) -> usize {
    let mut current = entity;
    let mut updated = 0;

    while let Ok(parent) = parents.get(current) {
        let ancestor = parent.get();
        if !profiles.contains(ancestor) {
            break;
        }
        let total = children_lift(ancestor, children, profiles);
        if let Ok(mut profile) = profiles.get_mut(ancestor) {
            apply_children_lift(&mut profile, total, constants);
        }
        current = ancestor;
        updated += 1;
    }
    updated
}
