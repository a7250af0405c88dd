// File: crates/snap-core/tests/snapping.rs
// Purpose: Validate snap results, tie-break rule, and idempotence for both grid kinds.

use std::f64::consts::TAU;

use snap_core::{snap, GridConfig, GridKind, Point3};

const TOL: f64 = 1e-9;

fn cartesian(cell: f64) -> GridConfig {
    GridConfig::cartesian(cell).unwrap()
}

fn polar(cell: f64, divisions: u32) -> GridConfig {
    GridConfig::polar(cell, divisions).unwrap()
}

#[test]
fn cartesian_rounds_each_axis_independently() {
    let config = cartesian(2.0);
    let snapped = snap(&config, Point3::new(2.9, 5.0, -1.1));
    assert!(snapped.approx_eq(&Point3::new(2.0, 5.0, -2.0), TOL), "got {snapped:?}");
}

#[test]
fn cartesian_leaves_lattice_points_in_place() {
    let config = cartesian(0.5);
    for &(k, m) in &[(0i32, 0i32), (3, -2), (-7, 7), (10, 1)] {
        let p = Point3::new(f64::from(k) * 0.5, 1.25, f64::from(m) * 0.5);
        let snapped = snap(&config, p);
        assert!(snapped.approx_eq(&p, TOL), "lattice point moved: {p:?} -> {snapped:?}");
    }
}

#[test]
fn ties_round_half_away_from_zero() {
    let config = cartesian(1.0);
    let pos = snap(&config, Point3::new(2.5, 0.0, 0.5));
    assert!(pos.approx_eq(&Point3::new(3.0, 0.0, 1.0), TOL), "got {pos:?}");

    let neg = snap(&config, Point3::new(-2.5, 0.0, -0.5));
    assert!(neg.approx_eq(&Point3::new(-3.0, 0.0, -1.0), TOL), "got {neg:?}");
}

#[test]
fn y_passes_through_unchanged() {
    let points = [
        Point3::new(1.3, -4.75, 0.2),
        Point3::new(-0.01, 123.456, 9.9),
        Point3::new(5.5, 0.0, -5.5),
    ];
    for config in [cartesian(1.0), polar(1.0, 24)] {
        for p in points {
            assert_eq!(snap(&config, p).y, p.y, "y changed under {:?}", config.kind);
        }
    }
}

#[test]
fn polar_snaps_radius_and_angle_independently() {
    // Four sectors: nearest spoke to (3, 0.1) in the X-Z plane is angle 0.
    let config = polar(1.0, 4);
    let snapped = snap(&config, Point3::new(3.0, 0.0, 0.1));
    assert!(snapped.approx_eq(&Point3::new(3.0, 0.0, 0.0), TOL), "got {snapped:?}");
}

#[test]
fn polar_snaps_onto_diagonal_spoke() {
    // Eight sectors put a spoke at 45 degrees; a point near it lands exactly on it.
    let config = polar(1.0, 8);
    let snapped = snap(&config, Point3::new(2.0, 1.0, 1.9));
    let r = snapped.x.hypot(snapped.z);
    assert!((r - 3.0).abs() < TOL, "radius {r}");
    assert!((snapped.z.atan2(snapped.x) - TAU / 8.0).abs() < TOL);
    assert_eq!(snapped.y, 1.0);
}

#[test]
fn polar_collapses_near_origin_to_center() {
    let config = polar(1.0, 24);
    let snapped = snap(&config, Point3::new(0.2, 7.0, -0.1));
    assert!(snapped.approx_eq(&Point3::new(0.0, 7.0, 0.0), TOL), "got {snapped:?}");
}

#[test]
fn snapping_is_idempotent() {
    let samples = [
        Point3::new(2.9, 5.0, -1.1),
        Point3::new(-13.7, 0.0, 42.42),
        Point3::new(0.49, -2.0, 0.51),
        Point3::new(-0.001, 3.0, -15.99),
        Point3::new(7.0, 1.0, 7.0),
    ];
    let configs = [cartesian(1.0), cartesian(0.25), polar(1.0, 24), polar(2.5, 6)];
    for config in configs {
        for p in samples {
            let once = snap(&config, p);
            let twice = snap(&config, once);
            assert!(
                twice.approx_eq(&once, TOL),
                "not idempotent under {:?}: {once:?} -> {twice:?}",
                config.kind
            );
        }
    }
}

#[test]
fn snap_stays_total_on_degenerate_configs() {
    // Fields pushed out of range after construction; operations clamp.
    let mut config = GridConfig::default();
    config.cell_size = 0.0;
    let p = snap(&config, Point3::new(1.0, 2.0, 3.0));
    assert!(p.x.is_finite() && p.z.is_finite());

    config.kind = GridKind::Polar;
    config.angular_divisions = 0;
    let p = snap(&config, Point3::new(1.0, 2.0, 3.0));
    assert!(p.x.is_finite() && p.z.is_finite());
}
