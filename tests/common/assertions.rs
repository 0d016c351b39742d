use procwing::components::{AerodynamicProfile, WingMeshes};

/// Assert that every derived aerodynamic value is usable
#[track_caller]
pub fn assert_profile_valid(profile: &AerodynamicProfile) {
    assert!(profile.is_finite(), "Profile has non-finite values: {profile:?}");
    assert!(profile.surface_area >= 0.0, "Surface area is negative");
    assert!(profile.mass > 0.0, "Mass must be positive");
    assert!(
        (0.0..=1.0).contains(&profile.pseudotaper_ratio),
        "Pseudotaper ratio {} outside [0, 1]",
        profile.pseudotaper_ratio
    );
    assert!(
        profile.connection_force >= 50.0,
        "Connection force below floor"
    );
    assert_eq!(profile.breaking_force, profile.connection_force);
    assert_eq!(profile.breaking_torque, profile.connection_force);
}

/// Assert that a rebuilt part has a full, finite set of sub-meshes
#[track_caller]
pub fn assert_meshes_valid(meshes: &WingMeshes) {
    assert!(!meshes.structure.mesh.is_empty(), "Structure mesh is empty");
    assert!(!meshes.surface.mesh.is_empty(), "Surface mesh is empty");
    assert!(
        meshes.all().all(|sub| sub.mesh.is_finite()),
        "Mesh contains non-finite vertices"
    );
    assert!(
        meshes.trailing_edges.iter().filter(|e| e.visible).count() <= 1,
        "More than one trailing edge visible"
    );
    assert!(meshes.structure.collision.enabled);
}
