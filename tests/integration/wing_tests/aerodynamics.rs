use approx::assert_relative_eq;
use procwing::{
    components::{
        AeroCommitted, AerodynamicProfile, DragCube, ExternalAeroSurface, PendingAeroCommit,
        StockLiftSurface, WingParameters, WingPart,
    },
    resources::AeroBackend,
};

use crate::common::{assert_profile_valid, spawn_wing, TestAppBuilder};

#[test]
fn test_profile_derived_on_first_tick() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);

    app.run_ticks(1);

    let profile = app.get::<AerodynamicProfile>(wing).expect("profile");
    assert_profile_valid(profile);
    assert_relative_eq!(profile.semispan, 4.0);
    assert_relative_eq!(profile.mean_aerodynamic_chord, 4.72, epsilon = 1e-12);
    assert_relative_eq!(profile.taper_ratio, 1.0);

    let stock = app.get::<StockLiftSurface>(wing).expect("stock surface");
    assert_relative_eq!(
        stock.lift_coefficient,
        profile.surface_area / 3.52,
        epsilon = 1e-12
    );
}

#[test]
fn test_children_lift_aggregates_up_the_tree() {
    let mut app = TestAppBuilder::new().build();
    let root = spawn_wing(&mut app);
    let middle = spawn_wing(&mut app);
    let tip = spawn_wing(&mut app);
    app.attach(root, &[middle]);
    app.attach(middle, &[tip]);

    app.run_ticks(1);

    let tip_profile = app.get::<AerodynamicProfile>(tip).expect("tip").clone();
    let middle_profile = app.get::<AerodynamicProfile>(middle).expect("middle").clone();
    let root_profile = app.get::<AerodynamicProfile>(root).expect("root").clone();

    assert_eq!(tip_profile.children_cl, 0.0);
    assert_relative_eq!(middle_profile.children_cl, tip_profile.cl, epsilon = 1e-9);
    assert_relative_eq!(
        root_profile.children_cl,
        middle_profile.cl + tip_profile.cl,
        epsilon = 1e-9
    );
    assert!(root_profile.connection_force >= middle_profile.connection_force);
    assert!(middle_profile.connection_force >= tip_profile.connection_force);
}

#[test]
fn test_child_edit_refreshes_ancestors() {
    let mut app = TestAppBuilder::new().build();
    let root = spawn_wing(&mut app);
    let child = spawn_wing(&mut app);
    app.attach(root, &[child]);
    app.run_ticks(1);
    let before = app.get::<AerodynamicProfile>(root).expect("root").children_cl;

    app.get_mut::<WingParameters>(child).expect("params").length = 8.0;
    app.run_ticks(1);

    let child_cl = app.get::<AerodynamicProfile>(child).expect("child").cl;
    let after = app.get::<AerodynamicProfile>(root).expect("root").children_cl;
    assert!(after > before);
    assert_relative_eq!(after, child_cl, epsilon = 1e-9);
}

#[test]
fn test_commit_fires_two_ticks_after_recompute() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);

    app.run_ticks(1);
    assert!(app.get::<PendingAeroCommit>(wing).expect("pending").is_pending());
    assert_eq!(app.get::<DragCube>(wing).map(|c| c.revision), Some(0));

    app.run_ticks(1);
    assert_eq!(app.get::<DragCube>(wing).map(|c| c.revision), Some(0));
    assert!(app.events::<AeroCommitted>().is_empty());

    app.run_ticks(1);
    let cube = app.get::<DragCube>(wing).expect("drag cube");
    assert_eq!(cube.revision, 1);
    assert!(cube.size.x > 0.0);
    assert_eq!(app.events::<AeroCommitted>(), vec![AeroCommitted { entity: wing }]);
    assert!(!app.get::<PendingAeroCommit>(wing).expect("pending").is_pending());
}

#[test]
fn test_repeated_edits_restart_commit() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);
    app.run_ticks(1);

    for length in [5.0, 6.0, 7.0] {
        app.get_mut::<WingParameters>(wing).expect("params").length = length;
        app.run_ticks(1);
    }
    assert!(app.events::<AeroCommitted>().is_empty());

    app.run_ticks(2);
    assert_eq!(app.events::<AeroCommitted>().len(), 1);
}

#[test]
fn test_external_backend_publishes_and_falls_back() {
    let mut app = TestAppBuilder::new()
        .with_backend(AeroBackend::External)
        .build();
    let external = app.spawn((
        procwing::components::WingBundle::with_defaults(WingPart::wing()),
        ExternalAeroSurface::default(),
    ));
    let plain = spawn_wing(&mut app);

    app.run_ticks(1);

    let surface = app.get::<ExternalAeroSurface>(external).expect("external");
    assert_relative_eq!(surface.b_2, 4.0);
    assert_relative_eq!(surface.mac, 4.72, epsilon = 1e-12);
    assert_eq!(surface.initializations, 1);

    let stock = app.get::<StockLiftSurface>(plain).expect("stock");
    assert!(stock.lift_coefficient > 0.0);

    app.run_ticks(2);
    let surface = app.get::<ExternalAeroSurface>(external).expect("external");
    assert_eq!(surface.mesh_rebuilds, 1);
    assert_eq!(surface.initializations, 2);
    assert_eq!(app.get::<DragCube>(plain).map(|c| c.revision), Some(1));
}
