use bevy::prelude::*;

use crate::components::{DeflectionGroup, HingeActuator};
use crate::resources::{DebugLogConfig, DeflectionConfig};

/// Live state of one group member for a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorSample {
    pub desired: f64,
    pub speed: f64,
}

/// Consensus deflection of a group for one step.
///
/// The candidate is the signed desired deflection with the largest magnitude. If it
/// is further than the fastest actuator can travel in `dt` (plus `slack`) from
/// `last_angle`, the group only moves that far towards it. Returns `None` for an
/// empty sample set.
pub fn consensus_angle(
    samples: &[ActuatorSample],
    last_angle: f64,
    dt: f64,
    slack: f64,
) -> Option<f64> {
    let candidate = samples
        .iter()
        .map(|s| s.desired)
        .filter(|d| d.is_finite())
        .fold(None, |best: Option<f64>, d| match best {
            Some(b) if b.abs() >= d.abs() => Some(b),
            _ => Some(d),
        })?;
    let max_delta = samples
        .iter()
        .map(|s| s.speed * dt)
        .filter(|d| d.is_finite())
        .fold(0.0_f64, f64::max);

    let delta = candidate - last_angle;
    if delta.abs() > max_delta + slack {
        Some(last_angle + max_delta * delta.signum())
    } else {
        Some(candidate)
    }
}

/// Steps every deflection group driven by actuator type `A`: prunes dead members,
/// dissolves groups of one and applies the consensus angle to the rest.
pub fn deflection_sync_system<A: HingeActuator + Component>(
    mut commands: Commands,
    mut groups: Query<(Entity, &mut DeflectionGroup)>,
    mut actuators: Query<(&mut A, &mut Transform)>,
    time: Res<Time<Fixed>>,
    config: Res<DeflectionConfig>,
    log: Res<DebugLogConfig>,
) {
    let dt = time.timestep().as_secs_f64();

    for (root, mut group) in groups.iter_mut() {
        let before = group.members.len();
        group.members.retain(|member| actuators.contains(*member));
        if group.members.len() < before && log.log_deflection {
            debug!(
                "Pruned {} stale member(s) from deflection group {:?}",
                before - group.members.len(),
                root
            );
        }
        if group.members.len() <= 1 {
            info!("Dissolving deflection group {:?}: one member left", root);
            commands.entity(root).remove::<DeflectionGroup>();
            continue;
        }

        let samples: Vec<ActuatorSample> = group
            .members
            .iter()
            .filter_map(|member| actuators.get(*member).ok())
            .map(|(actuator, _)| ActuatorSample {
                desired: actuator.desired_deflection(),
                speed: actuator.actuator_speed(),
            })
            .collect();
        let Some(angle) = consensus_angle(&samples, group.last_angle, dt, config.rate_limit_slack)
        else {
            continue;
        };
        group.last_angle = angle;

        for member in &group.members {
            if let Ok((mut actuator, mut transform)) = actuators.get_mut(*member) {
                actuator.apply_deflection(angle, &mut transform);
            }
        }
        if log.log_deflection {
            debug!("Deflection group {:?} at {:.3} deg", root, angle);
        }
    }
}
