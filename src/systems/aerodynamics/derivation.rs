use bevy::prelude::*;
use nalgebra::Vector3;
use std::f64::consts::PI;

use super::aggregation::{children_lift, propagate_children_lift};
use crate::components::{AerodynamicProfile, PendingAeroCommit, RebuildFlags, WingParameters, WingPart};
use crate::resources::{AeroConstants, CommitConfig, DebugLogConfig};

// --- Pure Calculation Logic ---

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn finite_vector(v: Vector3<f64>) -> Vector3<f64> {
    v.map(|c| finite_or(c, 0.0))
}

/// Root and tip chords including the edge pieces that contribute to lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordSums {
    pub root: f64,
    pub tip: f64,
    /// Mid-chord shift of the root caused by the edges, wing parts only.
    pub root_mid_chord_offset: Vector3<f64>,
}

pub fn chord_sums(params: &WingParameters, part: &WingPart) -> ChordSums {
    let mut root = params.width_root;
    let mut tip = params.width_tip;
    let mut offset = 0.0;

    if part.is_control_surface() {
        root += params.edge_width_trailing_root;
        tip += params.edge_width_trailing_tip;
    } else {
        if params.has_leading_edge() {
            root += params.edge_width_leading_root;
            tip += params.edge_width_leading_tip;
            offset += 0.2 * (params.edge_width_leading_root + params.edge_width_leading_tip);
        }
        if params.has_trailing_edge() {
            root += params.edge_width_trailing_root;
            tip += params.edge_width_trailing_tip;
            offset -= 0.25 * (params.edge_width_trailing_root + params.edge_width_trailing_tip);
        }
    }

    ChordSums {
        root,
        tip,
        root_mid_chord_offset: Vector3::new(0.0, offset, 0.0),
    }
}

/// Spanwise fraction `x` at which a linearly tapered planform splits into two
/// equal areas. Solves `2(tip - root)x² + 4·root·x - (tip + root) = 0` and keeps
/// the root inside `[0, 1]`; falls back to 0.5 when the planform is untapered or no
/// root is in range.
pub fn pseudotaper_ratio(root: f64, tip: f64) -> f64 {
    let a = 2.0 * (tip - root);
    if a == 0.0 {
        return 0.5;
    }
    let b = 4.0 * root;
    let c = -tip - root;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return 0.5;
    }
    let sqrt_d = discriminant.sqrt();
    let x1 = (-b + sqrt_d) / 2.0 / a;
    let x2 = (-b - sqrt_d) / 2.0 / a;
    [x1, x2]
        .into_iter()
        .find(|x| (0.0..=1.0).contains(x))
        .unwrap_or(0.5)
}

/// Empirical lift-slope scale of a swept finite wing.
pub fn aspect_ratio_sweep_scale(aspect_ratio: f64, mid_chord_sweep_deg: f64) -> f64 {
    let swept = aspect_ratio / mid_chord_sweep_deg.to_radians().cos();
    2.0 * PI / (2.0 + (swept * swept + 4.0).sqrt()) * aspect_ratio
}

/// Joint strength from own and descendant lift.
pub fn connection_force(cl: f64, children_cl: f64, constants: &AeroConstants) -> f64 {
    finite_or(
        ((cl + children_cl).sqrt() * constants.connection_factor)
            .max(constants.connection_minimum)
            .round(),
        constants.connection_minimum,
    )
}

/// Stores `children_cl` and refreshes everything derived from it.
pub fn apply_children_lift(
    profile: &mut AerodynamicProfile,
    children_cl: f64,
    constants: &AeroConstants,
) {
    profile.children_cl = finite_or(children_cl, 0.0);
    profile.connection_force = connection_force(profile.cl, profile.children_cl, constants);
    profile.breaking_force = profile.connection_force;
    profile.breaking_torque = profile.connection_force;
}

/// Derives the full aerodynamic profile of one part.
///
/// # Arguments
/// * `params` - Current (clamped) shape parameters.
/// * `part` - Geometry class and mirrored flag.
/// * `children_cl` - Sum of lift and aggregated lift of the direct children.
/// * `constants` - Empirical fudge factors.
pub fn derive_profile(
    params: &WingParameters,
    part: &WingPart,
    children_cl: f64,
    constants: &AeroConstants,
) -> AerodynamicProfile {
    let sums = chord_sums(params, part);
    let length = params.length;
    let pseudotaper = finite_or(pseudotaper_ratio(sums.root, sums.tip), 0.5);
    let mean_aerodynamic_chord = (sums.tip + sums.root) / 2.0;

    let (taper_ratio, mid_chord_sweep) = if part.is_control_surface() {
        let root_limit = (length / 2.0) / (params.width_root + params.edge_width_trailing_root);
        let tip_limit = (length / 2.0) / (params.width_tip + params.edge_width_trailing_tip);
        let offset_root = params.offset_root.max(-root_limit).min(root_limit);
        let offset_tip = params.offset_tip.max(-tip_limit).min(tip_limit);
        (
            (length + sums.tip * offset_tip - sums.root * offset_root) / length,
            ((sums.root - sums.tip).abs() / length).atan().to_degrees(),
        )
    } else {
        (
            sums.tip / sums.root,
            (params.offset_tip / length).atan().to_degrees(),
        )
    };

    let semispan = length;
    let surface_area = mean_aerodynamic_chord * semispan;
    let aspect_ratio = 2.0 * semispan / mean_aerodynamic_chord;
    let arss = aspect_ratio_sweep_scale(aspect_ratio, mid_chord_sweep);

    let mass = (constants.mass_fudge
        * surface_area
        * ((arss * 2.0) / (3.0 + arss))
        * ((1.0 + taper_ratio) / 2.0))
        .max(constants.mass_minimum);
    let cd = constants.drag_base / arss * constants.drag_multiplier;
    let cl = constants.lift_fudge * surface_area * arss;

    let (center_of_lift, center_of_mass) = if part.is_control_surface() {
        let flip = if part.mirrored { -1.0 } else { 1.0 };
        let x = length * pseudotaper * flip - length / (2.0 * flip);
        let chord = sums.root + sums.tip;
        (
            Vector3::new(x, -chord / 4.0, 0.0),
            Vector3::new(x, -chord / 8.0, 0.0),
        )
    } else {
        let edge = |present: bool, width: f64| if present { width } else { 0.0 };
        let leading = params.edge_type_leading > 1.0;
        let trailing = params.edge_type_trailing > 1.0;
        let lateral = (edge(leading, params.edge_width_leading_tip)
            - edge(trailing, params.edge_width_trailing_tip)
            + edge(leading, params.edge_width_leading_root)
            - edge(trailing, params.edge_width_trailing_root))
            / 4.0;
        let x = length * pseudotaper;
        let swept = -(params.offset_tip + params.offset_root) * pseudotaper + params.offset_root;
        (
            Vector3::new(x, swept + lateral, 0.0),
            Vector3::new(x, swept + lateral / 2.0, 0.0),
        )
    };

    let sanitized_cl = finite_or(cl, 0.0);
    let mut profile = AerodynamicProfile {
        semispan: finite_or(semispan, 0.0),
        mean_aerodynamic_chord: finite_or(mean_aerodynamic_chord, 0.0),
        taper_ratio: finite_or(taper_ratio, 0.0),
        mid_chord_sweep: finite_or(mid_chord_sweep, 0.0),
        aspect_ratio: finite_or(aspect_ratio, 0.0),
        aspect_ratio_sweep_scale: finite_or(arss, 0.0),
        surface_area: finite_or(surface_area, 0.0),
        mass: finite_or(mass, constants.mass_minimum),
        cl: sanitized_cl,
        cd: finite_or(cd, 0.0),
        pseudotaper_ratio: pseudotaper,
        center_of_lift: finite_vector(center_of_lift),
        center_of_mass: finite_vector(center_of_mass),
        root_mid_chord_offset: finite_vector(sums.root_mid_chord_offset),
        ..Default::default()
    };
    apply_children_lift(&mut profile, children_cl, constants);
    profile
}

// --- System ---

/// Recomputes the profile of every part flagged for an aero rebuild, arms its
/// delayed commit and pushes the new lift up the attachment tree.
pub fn aero_derivation_system(
    mut parts: Query<(
        Entity,
        &WingParameters,
        &WingPart,
        &mut RebuildFlags,
        &mut PendingAeroCommit,
    )>,
    mut profiles: Query<&mut AerodynamicProfile>,
    children: Query<&Children>,
    parents: Query<&Parent>,
    constants: Res<AeroConstants>,
    commit: Res<CommitConfig>,
    log: Res<DebugLogConfig>,
) {
    for (entity, params, part, mut flags, mut pending) in parts.iter_mut() {
        if !flags.aero {
            continue;
        }
        flags.aero = false;

        let children_cl = children_lift(entity, &children, &profiles);
        let profile = derive_profile(params, part, children_cl, &constants);
        if log.log_aero {
            debug!(
                "Aero {:?}: area {:.3}, MAC {:.3}, taper {:.3}, Cl {:.4}, children Cl {:.4}, connection {}",
                entity,
                profile.surface_area,
                profile.mean_aerodynamic_chord,
                profile.taper_ratio,
                profile.cl,
                profile.children_cl,
                profile.connection_force
            );
        }

        let Ok(mut stored) = profiles.get_mut(entity) else {
            warn!("Part {:?} has no aerodynamic profile to update", entity);
            continue;
        };
        *stored = profile;
        pending.arm(commit.delay_ticks);

        let updated = propagate_children_lift(entity, &parents, &children, &mut profiles, &constants);
        if log.log_aero && updated > 0 {
            debug!("Aero {:?}: refreshed {} ancestor(s)", entity, updated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::WingKind;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn plain_wing(width_root: f64, width_tip: f64, length: f64) -> WingParameters {
        WingParameters {
            length,
            width_root,
            width_tip,
            edge_type_leading: 1.0,
            edge_type_trailing: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_taper_and_mac_without_edges() {
        let profile = derive_profile(
            &plain_wing(4.0, 0.5, 4.0),
            &WingPart::wing(),
            0.0,
            &AeroConstants::default(),
        );
        assert_relative_eq!(profile.taper_ratio, 0.125);
        assert_relative_eq!(profile.mean_aerodynamic_chord, 2.25);
        assert_relative_eq!(profile.semispan, 4.0);
        assert_relative_eq!(profile.surface_area, 9.0);
        assert_relative_eq!(profile.mid_chord_sweep, 0.0);
    }

    #[test]
    fn test_edges_extend_chord_sums() {
        let params = WingParameters::default();
        let sums = chord_sums(&params, &WingPart::wing());
        // Leading 0.24 plus trailing 0.48 at each end.
        assert_relative_eq!(sums.root, 4.72, epsilon = 1e-12);
        assert_relative_eq!(sums.tip, 4.72, epsilon = 1e-12);
        assert_relative_eq!(
            sums.root_mid_chord_offset.y,
            0.2 * 0.48 - 0.25 * 0.96,
            epsilon = 1e-12
        );

        let ctrl = WingParameters::default_for(WingKind::ControlSurface);
        let sums = chord_sums(&ctrl, &WingPart::control_surface());
        assert_relative_eq!(sums.root, 0.98, epsilon = 1e-12);
        assert_eq!(sums.root_mid_chord_offset, Vector3::zeros());
    }

    #[test]
    fn test_pseudotaper_of_rectangle_is_half() {
        assert_eq!(pseudotaper_ratio(2.0, 2.0), 0.5);
    }

    #[test]
    fn test_pseudotaper_splits_area_evenly() {
        let (root, tip) = (4.0, 1.0);
        let x = pseudotaper_ratio(root, tip);
        let chord_at = |t: f64| root + t * (tip - root);
        let inner = (root + chord_at(x)) / 2.0 * x;
        let outer = (chord_at(x) + tip) / 2.0 * (1.0 - x);
        assert_relative_eq!(inner, outer, epsilon = 1e-9);
    }

    #[test]
    fn test_pseudotaper_stays_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let root: f64 = rng.gen_range(0.0..20.0);
            let tip: f64 = rng.gen_range(0.0..20.0);
            if root == 0.0 && tip == 0.0 {
                continue;
            }
            let x = pseudotaper_ratio(root, tip);
            assert!((0.0..=1.0).contains(&x), "root {root}, tip {tip} -> {x}");
        }
    }

    #[test]
    fn test_degenerate_pseudotaper_falls_back() {
        assert_eq!(pseudotaper_ratio(0.0, 0.0), 0.5);
        assert_eq!(pseudotaper_ratio(f64::NAN, 1.0), 0.5);
    }

    #[test]
    fn test_connection_force_has_floor() {
        let constants = AeroConstants::default();
        assert_eq!(connection_force(0.0, 0.0, &constants), 50.0);
        assert_eq!(connection_force(1.0, 0.0, &constants), 150.0);
        assert_eq!(connection_force(0.5, 0.5, &constants), 150.0);
        assert_eq!(connection_force(-4.0, 0.0, &constants), 50.0);
    }

    #[test]
    fn test_children_lift_raises_connection() {
        let constants = AeroConstants::default();
        let params = WingParameters::default();
        let alone = derive_profile(&params, &WingPart::wing(), 0.0, &constants);
        let loaded = derive_profile(&params, &WingPart::wing(), 10.0, &constants);

        assert_eq!(alone.cl, loaded.cl);
        assert_eq!(loaded.children_cl, 10.0);
        assert!(loaded.connection_force > alone.connection_force);
        assert_eq!(loaded.breaking_force, loaded.connection_force);
        assert_eq!(loaded.breaking_torque, loaded.connection_force);
    }

    #[test]
    fn test_empirical_values_for_default_wing() {
        let constants = AeroConstants::default();
        let profile = derive_profile(&WingParameters::default(), &WingPart::wing(), 0.0, &constants);

        let ar = 2.0 * 4.0 / 4.72;
        let arss = 2.0 * PI / (2.0 + (ar * ar + 4.0_f64).sqrt()) * ar;
        assert_relative_eq!(profile.aspect_ratio, ar, epsilon = 1e-12);
        assert_relative_eq!(profile.aspect_ratio_sweep_scale, arss, epsilon = 1e-12);
        assert_relative_eq!(profile.cl, 0.0775 * 4.72 * 4.0 * arss, epsilon = 1e-12);
        assert_relative_eq!(profile.cd, 0.6 / arss * 3.3939, epsilon = 1e-12);
        assert!(profile.mass > constants.mass_minimum);
        assert_relative_eq!(profile.pseudotaper_ratio, 0.5);
        assert_relative_eq!(profile.center_of_lift.x, 2.0);
    }

    #[test]
    fn test_control_surface_centre_flips_when_mirrored() {
        let constants = AeroConstants::default();
        let params = WingParameters {
            width_tip: 0.25,
            ..WingParameters::default_for(WingKind::ControlSurface)
        };
        let right = derive_profile(&params, &WingPart::control_surface(), 0.0, &constants);
        let left = derive_profile(
            &params,
            &WingPart::control_surface().with_mirrored(true),
            0.0,
            &constants,
        );

        assert_relative_eq!(left.center_of_lift.x, -right.center_of_lift.x, epsilon = 1e-12);
        assert_relative_eq!(left.center_of_lift.y, right.center_of_lift.y);
        assert_eq!(left.cl, right.cl);
        assert_eq!(left.mass, right.mass);
    }

    #[test]
    fn test_control_surface_sweep_uses_chord_difference() {
        let params = WingParameters {
            width_root: 1.0,
            width_tip: 0.5,
            edge_width_trailing_root: 0.0,
            edge_width_trailing_tip: 0.0,
            ..WingParameters::default_for(WingKind::ControlSurface)
        };
        let profile = derive_profile(
            &params,
            &WingPart::control_surface(),
            0.0,
            &AeroConstants::default(),
        );
        assert_relative_eq!(profile.mid_chord_sweep, 0.5_f64.atan().to_degrees());
        assert_relative_eq!(profile.taper_ratio, 1.0);
    }

    #[test]
    fn test_zero_length_stays_finite() {
        let params = WingParameters {
            length: 0.0,
            width_root: 0.0,
            width_tip: 0.0,
            edge_type_leading: 1.0,
            edge_type_trailing: 1.0,
            ..Default::default()
        };
        for part in [WingPart::wing(), WingPart::control_surface()] {
            let profile = derive_profile(&params, &part, 0.0, &AeroConstants::default());
            assert!(profile.is_finite(), "{profile:?}");
            assert_eq!(profile.pseudotaper_ratio, 0.5);
        }
    }
}
