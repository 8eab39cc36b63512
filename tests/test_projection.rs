use flowstate::error::Error;
use flowstate::projection::*;
use flowstate::types::Observer;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn observer() -> Observer {
    Observer::utc(25.0, 55.0).unwrap()
}

// ── get_edge ──

#[test]
fn test_edge_due_east_literal() {
    let p = get_edge(25.0, 55.0, 90.0, 250.0).unwrap();
    assert_approx!(p.lat, 25.0, 1e-12);
    assert_approx!(p.lon, 55.002482602800, 1e-11);
}

#[test]
fn test_edge_due_north_literal() {
    let p = get_edge(25.0, 55.0, 0.0, 250.0).unwrap();
    assert_approx!(p.lat, 25.00225000225, 1e-11);
    assert_approx!(p.lon, 55.0, 1e-12);
}

#[test]
fn test_edge_north_east() {
    let p = get_edge(25.0, 55.0, 45.0, 250.0).unwrap();
    assert_approx!(p.lat, 25.001590991849, 1e-11);
    assert_approx!(p.lon, 55.001755465275, 1e-11);
}

#[test]
fn test_edge_zero_radius_is_observer() {
    let p = get_edge(-33.9, 151.2, 123.0, 0.0).unwrap();
    assert_eq!(p.lat, -33.9);
    assert_eq!(p.lon, 151.2);
}

// ── Symmetry ──

#[test]
fn test_opposite_bearings_symmetric_about_observer() {
    for &bearing in &[0.0, 17.5, 90.0, 133.0, 200.0, 359.0] {
        let a = offset_point(25.0, 55.0, bearing, 250.0).unwrap();
        let b = offset_point(25.0, 55.0, bearing + 180.0, 250.0).unwrap();
        assert_approx!((a.lat + b.lat) / 2.0, 25.0, 1e-12);
        assert_approx!((a.lon + b.lon) / 2.0, 55.0, 1e-12);
    }
}

// ── Sun and shadow markers ──

#[test]
fn test_sun_marker_on_circle_at_horizon() {
    let obs = observer();
    let at_horizon = sun_marker(&obs, 90.0, 250.0, 0.0).unwrap();
    let below = sun_marker(&obs, 90.0, 250.0, -10.0).unwrap();
    let edge = get_edge(25.0, 55.0, 90.0, 250.0).unwrap();
    assert_approx!(at_horizon.lon, edge.lon, 1e-12);
    assert_approx!(below.lon, edge.lon, 1e-12);
}

#[test]
fn test_sun_marker_collapses_toward_observer_as_sun_climbs() {
    let obs = observer();
    let low = sun_marker(&obs, 0.0, 250.0, 10.0).unwrap();
    let high = sun_marker(&obs, 0.0, 250.0, 70.0).unwrap();
    let zenith = sun_marker(&obs, 0.0, 250.0, 90.0).unwrap();
    assert!(low.lat - 25.0 > high.lat - 25.0);
    assert_approx!(zenith.lat, 25.0, 1e-12);
}

#[test]
fn test_shadow_marker_fixed_length_opposite_sun() {
    let obs = observer();
    let noon = shadow_marker(&obs, 180.0, 250.0).unwrap();
    assert_approx!(noon.lat, 25.0 + 0.001575001575, 1e-12);
    assert_approx!(noon.lon, 55.0, 1e-12);

    let m_low = project_point(&obs, 180.0, 250.0, 5.0).unwrap();
    let m_high = project_point(&obs, 180.0, 250.0, 85.0).unwrap();
    assert_eq!(m_low.shadow, m_high.shadow);
    assert_ne!(m_low.sun, m_high.sun);
}

#[test]
fn test_elevation_scale() {
    assert_approx!(elevation_scale(-5.0), 1.0, 1e-15);
    assert_approx!(elevation_scale(0.0), 1.0, 1e-15);
    assert_approx!(elevation_scale(60.0), 0.5, 1e-12);
}

// ── Domain ──

#[test]
fn test_polar_latitude_is_rejected() {
    match get_edge(89.95, 0.0, 90.0, 250.0) {
        Err(Error::PolarLatitude(lat)) => assert_eq!(lat, 89.95),
        other => panic!("expected PolarLatitude, got {:?}", other),
    }
    let pole = Observer::utc(-90.0, 0.0).unwrap();
    assert!(project_point(&pole, 10.0, 250.0, 10.0).is_err());
    assert!(get_edge(89.9, 0.0, 90.0, 250.0).is_ok());
}

#[test]
fn test_non_finite_inputs_rejected() {
    assert!(matches!(get_edge(25.0, 55.0, f64::NAN, 250.0), Err(Error::NonFinite(_))));
    assert!(matches!(get_edge(25.0, 55.0, 90.0, f64::INFINITY), Err(Error::NonFinite(_))));
}
