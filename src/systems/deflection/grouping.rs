use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::components::{DeflectionGroup, DeflectionGroupChecked, HingeActuator, WingKind, WingPart};
use crate::resources::{DebugLogConfig, DeflectionConfig};

/// True if two hinge axes (unit vectors) point the same way within `tolerance`.
pub fn axes_aligned(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).length() < tolerance
}

/// Links unchecked all-moving wings driven by `A` into deflection groups.
///
/// Each finder climbs through unchecked all-moving wings to the group root, then
/// searches the all-moving wings up to `search_depth` levels below that root for
/// hinges whose axis matches its own. An aligned root joins as well, so the result
/// does not depend on query order. A group of two or more is placed on the root,
/// merging into any group already there.
pub fn form_deflection_groups_system<A: HingeActuator + Component>(
    mut commands: Commands,
    candidates: Query<(Entity, &WingPart), (With<A>, Without<DeflectionGroupChecked>)>,
    parts: Query<(&WingPart, &GlobalTransform, Has<A>, Has<DeflectionGroupChecked>)>,
    parents: Query<&Parent>,
    children: Query<&Children>,
    mut groups: Query<&mut DeflectionGroup>,
    config: Res<DeflectionConfig>,
    log: Res<DebugLogConfig>,
) {
    let mut checked_now: HashSet<Entity> = HashSet::new();
    let mut formed: HashMap<Entity, Vec<Entity>> = HashMap::new();

    let is_checked = |entity: Entity, checked_now: &HashSet<Entity>| {
        checked_now.contains(&entity)
            || parts
                .get(entity)
                .map(|(_, _, _, checked)| checked)
                .unwrap_or(false)
    };
    let is_all_moving_wing = |entity: Entity| {
        parts
            .get(entity)
            .map(|(part, ..)| part.kind == WingKind::Wing && part.all_moving)
            .unwrap_or(false)
    };

    for (finder, part) in candidates.iter() {
        if !part.all_moving || is_checked(finder, &checked_now) {
            continue;
        }
        checked_now.insert(finder);
        commands.entity(finder).insert(DeflectionGroupChecked);

        let Ok((_, finder_transform, _, _)) = parts.get(finder) else {
            continue;
        };
        let finder_axis = *finder_transform.right();

        let mut root = finder;
        while let Ok(parent) = parents.get(root) {
            let parent = parent.get();
            if !is_all_moving_wing(parent) || is_checked(parent, &checked_now) {
                break;
            }
            root = parent;
        }

        let mut members = vec![finder];
        if root != finder {
            if let Ok((_, transform, true, _)) = parts.get(root) {
                if axes_aligned(*transform.right(), finder_axis, config.axis_tolerance) {
                    checked_now.insert(root);
                    commands.entity(root).insert(DeflectionGroupChecked);
                    members.push(root);
                }
            }
        }
        let mut frontier = vec![root];
        for _ in 0..config.search_depth {
            let mut next = Vec::new();
            for entity in frontier {
                let Ok(kids) = children.get(entity) else {
                    continue;
                };
                next.extend(kids.iter().copied().filter(|kid| is_all_moving_wing(*kid)));
            }
            for &candidate in &next {
                if is_checked(candidate, &checked_now) {
                    continue;
                }
                let Ok((_, transform, has_actuator, _)) = parts.get(candidate) else {
                    continue;
                };
                if !has_actuator {
                    continue;
                }
                if axes_aligned(*transform.right(), finder_axis, config.axis_tolerance) {
                    checked_now.insert(candidate);
                    commands.entity(candidate).insert(DeflectionGroupChecked);
                    members.push(candidate);
                }
            }
            frontier = next;
        }

        if members.len() > 1 {
            if log.log_deflection {
                debug!(
                    "Linked {} all-moving wings under {:?}: {:?}",
                    members.len(),
                    root,
                    members
                );
            }
            formed.entry(root).or_default().extend(members);
        }
    }

    for (root, members) in formed {
        if let Ok(mut group) = groups.get_mut(root) {
            for member in members {
                if !group.members.contains(&member) {
                    group.members.push(member);
                }
            }
        } else {
            info!(
                "Deflection group formed on {:?} with {} members",
                root,
                members.len()
            );
            commands.entity(root).insert(DeflectionGroup::new(members));
        }
    }
}
