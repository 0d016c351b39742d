use approx::assert_relative_eq;
use procwing::{
    components::{RebuildFlags, WingKind, WingMeshes, WingParameters, WingParametersChanged, WingPart},
    resources::TemplateMeshCache,
};

use crate::common::{assert_meshes_valid, spawn_wing, spawn_wing_with, TestAppBuilder};

#[test]
fn test_new_part_is_built_on_first_tick() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);

    app.run_ticks(1);

    let meshes = app.get::<WingMeshes>(wing).expect("meshes");
    assert_meshes_valid(meshes);
    assert_eq!(meshes.active_trailing, Some(2));
    assert_eq!(meshes.active_leading, Some(1));

    let bounds = meshes.structure.mesh.bounds().expect("bounds");
    assert_relative_eq!(bounds.min.x, -4.0, epsilon = 1e-5);
    assert_eq!(
        app.get::<RebuildFlags>(wing).copied(),
        Some(RebuildFlags {
            geometry: false,
            aero: false
        })
    );
    assert!(app.resource::<TemplateMeshCache>().is_loaded(WingKind::Wing));
    assert!(app.resource::<TemplateMeshCache>().diagnostics().is_empty());
}

#[test]
fn test_parameter_edit_rebuilds_mesh() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);
    app.run_ticks(1);
    assert!(app.events::<WingParametersChanged>().is_empty());

    app.get_mut::<WingParameters>(wing).expect("params").length = 6.0;
    app.run_ticks(1);

    let bounds = app
        .get::<WingMeshes>(wing)
        .and_then(|m| m.structure.mesh.bounds())
        .expect("bounds");
    assert_relative_eq!(bounds.min.x, -6.0, epsilon = 1e-5);

    let events = app.events::<WingParametersChanged>();
    assert_eq!(
        events,
        vec![WingParametersChanged {
            entity: wing,
            geometry: true,
            aero: true
        }]
    );
}

#[test]
fn test_paint_edit_skips_aero() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);
    app.run_ticks(1);

    app.get_mut::<WingParameters>(wing).expect("params").paint.top.hue = 0.5;
    app.run_ticks(1);

    let events = app.events::<WingParametersChanged>();
    assert_eq!(events.len(), 1);
    assert!(events[0].geometry);
    assert!(!events[0].aero);
}

#[test]
fn test_out_of_range_edit_is_clamped() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);
    app.get_mut::<WingParameters>(wing).expect("params").length = 1000.0;

    app.run_ticks(1);

    assert_eq!(app.get::<WingParameters>(wing).map(|p| p.length), Some(40.0));
    let meshes = app.get::<WingMeshes>(wing).expect("meshes");
    assert_meshes_valid(meshes);
}

#[test]
fn test_control_surface_and_wing_share_one_cache() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_wing(&mut app);
    let control = spawn_wing_with(
        &mut app,
        WingPart::control_surface(),
        WingParameters::default_for(WingKind::ControlSurface),
    );

    app.run_ticks(3);

    let cache = app.resource::<TemplateMeshCache>();
    assert!(cache.is_loaded(WingKind::Wing));
    assert!(cache.is_loaded(WingKind::ControlSurface));
    assert_meshes_valid(app.get::<WingMeshes>(wing).expect("wing meshes"));

    let control_meshes = app.get::<WingMeshes>(control).expect("control meshes");
    assert!(!control_meshes.structure.mesh.is_empty());
    assert!(control_meshes.all().all(|sub| sub.mesh.is_finite()));
}
