//! Flat-earth conversions between kilometres and degrees
//!
//! Good enough for scattering points over a few hundred metres; no attempt is
//! made to handle the poles or the antimeridian.

use crate::constants::{KM_PER_DEGREE_LAT, KM_PER_DEGREE_LNG_EQUATOR};

/// Assert that `actual` is within `max_deviation` percent of `expected`
///
/// # Examples
/// ```
/// use hex_map_utils::assert_deviation;
///
/// assert_deviation!(0.499, 0.5, 1.0, "radius drifted");
/// ```
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {{
        let actual_val = $actual;
        let expected_val = $expected;
        let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

        if actual_deviation >= $max_deviation {
            panic!(
                "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                actual_deviation, $max_deviation, format_args!($($arg)+), actual_val, expected_val
            );
        }
    }};
}

/// Kilometres spanned by one degree of longitude at `lat_degrees`.
///
/// Tends to zero at the poles; callers dividing by it get huge or infinite
/// offsets there.
///
/// # Examples
/// ```
/// use hex_map_utils::math_utils::km_per_degree_lng;
///
/// assert_eq!(km_per_degree_lng(0.0), 111.32);
/// assert!((km_per_degree_lng(60.0) - 55.66).abs() < 1e-9);
/// ```
pub fn km_per_degree_lng(lat_degrees: f64) -> f64 {
    KM_PER_DEGREE_LNG_EQUATOR * lat_degrees.to_radians().cos()
}

/// Degree offsets `(d_lng, d_lat)` for moving `distance_km` along `angle`
/// (radians, counter-clockwise from east) from a point at `lat_degrees`.
pub fn offset_degrees(lat_degrees: f64, distance_km: f64, angle: f64) -> (f64, f64) {
    let d_lat = distance_km * angle.sin() / KM_PER_DEGREE_LAT;
    let d_lng = distance_km * angle.cos() / km_per_degree_lng(lat_degrees);
    (d_lng, d_lat)
}

/// Approximate distance in km between two points near `origin_lat`, using
/// the same flat-earth scale as [`offset_degrees`].
pub fn flat_distance_km(origin_lat: f64, d_lng: f64, d_lat: f64) -> f64 {
    let dx = d_lng * km_per_degree_lng(origin_lat);
    let dy = d_lat * KM_PER_DEGREE_LAT;
    (dx * dx + dy * dy).sqrt()
}

/// Percentage deviation of `actual` from `expected`
///
/// # Examples
/// ```
/// use hex_map_utils::math_utils::deviation;
///
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}
