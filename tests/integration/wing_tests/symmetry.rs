use pretty_assertions::assert_eq;
use procwing::components::{
    AerodynamicProfile, RebuildFlags, SymmetryGroup, WingBundle, WingMeshes, WingParameters,
    WingParametersChanged, WingPart,
};

use crate::common::TestAppBuilder;

#[test]
fn test_edit_propagates_to_counterpart() {
    let mut app = TestAppBuilder::new().build();
    let mirror = app.spawn(WingBundle::with_defaults(WingPart::wing().with_mirrored(true)));
    let primary = app.spawn((
        WingBundle::with_defaults(WingPart::wing()),
        SymmetryGroup::new(vec![mirror]),
    ));
    app.run_ticks(1);

    {
        let mut params = app.get_mut::<WingParameters>(primary).expect("params");
        params.length = 6.0;
        params.width_tip = 2.0;
        params.offset_tip = 1.0;
    }
    app.run_ticks(1);

    let expected = app.get::<WingParameters>(primary).cloned();
    assert_eq!(app.get::<WingParameters>(mirror).cloned(), expected);
    assert_eq!(
        app.get::<AerodynamicProfile>(mirror).cloned(),
        app.get::<AerodynamicProfile>(primary).cloned()
    );
    assert!(app.get::<WingPart>(mirror).expect("part").mirrored);

    // The copied parameters are not detected as a second edit.
    app.run_ticks(1);
    assert!(app
        .events::<WingParametersChanged>()
        .iter()
        .all(|event| event.entity == primary));
    assert_eq!(
        app.get::<RebuildFlags>(mirror).copied(),
        Some(RebuildFlags {
            geometry: false,
            aero: false
        })
    );
}

#[test]
fn test_missing_counterpart_is_skipped() {
    let mut app = TestAppBuilder::new().build();
    let ghost = app.spawn(WingPart::wing());
    let primary = app.spawn((
        WingBundle::with_defaults(WingPart::wing()),
        SymmetryGroup::new(vec![ghost]),
    ));

    app.run_ticks(1);

    assert!(app.get::<AerodynamicProfile>(primary).expect("profile").cl > 0.0);
    assert!(app.get::<WingParameters>(ghost).is_none());
}

#[test]
fn test_mirrored_counterpart_swaps_asymmetric_edges() {
    let mut app = TestAppBuilder::new().build();
    let mirror = app.spawn(WingBundle::with_defaults(WingPart::wing().with_mirrored(true)));
    let primary = app.spawn((
        WingBundle::with_defaults(WingPart::wing()),
        SymmetryGroup::new(vec![mirror]),
    ));
    app.run_ticks(1);

    for (edge_type, primary_index, mirror_index) in
        [(10.0, 9, 10), (11.0, 10, 9), (12.0, 11, 12), (14.0, 13, 14), (4.0, 3, 3)]
    {
        app.get_mut::<WingParameters>(primary)
            .expect("params")
            .edge_type_trailing = edge_type;
        app.run_ticks(1);

        let primary_meshes = app.get::<WingMeshes>(primary).expect("primary meshes");
        let mirror_meshes = app.get::<WingMeshes>(mirror).expect("mirror meshes");
        assert_eq!(primary_meshes.active_trailing, Some(primary_index));
        assert_eq!(mirror_meshes.active_trailing, Some(mirror_index));
        assert!(mirror_meshes.trailing_edges[mirror_index].visible);
        assert_eq!(
            mirror_meshes.trailing_edges.iter().filter(|e| e.visible).count(),
            1
        );
    }
}

#[test]
fn test_mirrored_control_surface_keeps_edge_variant() {
    let mut app = TestAppBuilder::new().build();
    let mirror = app.spawn(WingBundle::with_defaults(
        WingPart::control_surface().with_mirrored(true),
    ));
    let primary = app.spawn((
        WingBundle::with_defaults(WingPart::control_surface()),
        SymmetryGroup::new(vec![mirror]),
    ));
    app.run_ticks(1);

    for (edge_type, index) in [(6.0, 5), (7.0, 6), (3.0, 2)] {
        app.get_mut::<WingParameters>(primary)
            .expect("params")
            .edge_type_trailing = edge_type;
        app.run_ticks(1);

        assert_eq!(
            app.get::<WingParameters>(mirror).map(|p| p.edge_type_trailing),
            Some(edge_type)
        );
        assert_eq!(
            app.get::<WingMeshes>(primary).and_then(|m| m.active_trailing),
            Some(index)
        );
        assert_eq!(
            app.get::<WingMeshes>(mirror).and_then(|m| m.active_trailing),
            Some(index)
        );
    }
}
