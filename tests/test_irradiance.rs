use flowstate::irradiance::*;

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

#[test]
fn test_zero_at_or_below_horizon() {
    for &el in &[0.0, -0.0, -0.5, -10.0, -45.0, -90.0] {
        assert_eq!(solar_radiation(el), 0.0, "elevation={}", el);
    }
}

#[test]
fn test_zenith_regression_value() {
    assert_approx!(solar_radiation(90.0), 957.13, 1e-9);
}

#[test]
fn test_known_elevations() {
    assert_approx!(solar_radiation(60.0), 799.21, 1e-9);
    assert_approx!(solar_radiation(45.0), 615.90, 1e-9);
    assert_approx!(solar_radiation(30.0), 386.58, 1e-9);
    assert_approx!(solar_radiation(5.0), 18.72, 1e-9);
}

#[test]
fn test_grazing_sun_is_finite_and_small() {
    let r = solar_radiation(0.01);
    assert!(r.is_finite());
    assert!(r >= 0.0 && r < 0.01, "radiation={}", r);
    assert!(air_mass(0.0) <= 1000.0 + 1e-9);
}

#[test]
fn test_monotonic_non_decreasing() {
    let mut prev = 0.0;
    for tenth in 1..=900 {
        let el = tenth as f64 / 10.0;
        let r = solar_radiation(el);
        assert!(r >= prev, "elevation={} radiation={} previous={}", el, r, prev);
        prev = r;
    }
}

#[test]
fn test_rounded_to_two_decimals() {
    for &el in &[3.3, 17.7, 41.2, 66.6] {
        let r = solar_radiation(el);
        assert_approx!(r * 100.0, (r * 100.0).round(), 1e-6);
    }
}
