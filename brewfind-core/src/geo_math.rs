//! Bearing and distance utilities over spherical coordinates.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, both in
//! degrees. All functions are total over finite inputs.
//!
//! A single haversine distance is used everywhere in the engine so that
//! every threshold (the travel-time horizon, the proximity radius) is
//! compared against the same measurement.

use geo::Coord;

/// Mean Earth radius in metres, as used by the haversine distance.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Initial great-circle bearing from `from` to `to`, in degrees `[0, 360)`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::geo_math::bearing_degrees;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let north = Coord { x: 0.0, y: 1.0 };
/// assert!((bearing_degrees(origin, north) - 0.0).abs() < 1e-9);
///
/// let east = Coord { x: 1.0, y: 0.0 };
/// assert!((bearing_degrees(origin, east) - 90.0).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "spherical trigonometry is inherently floating point"
)]
pub fn bearing_degrees(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lon1 = from.x.to_radians();
    let lat2 = to.y.to_radians();
    let lon2 = to.x.to_radians();

    let d_lon = lon2 - lon1;
    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Haversine distance between two coordinates, in metres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::geo_math::distance_meters;
///
/// let a = Coord { x: -122.4194, y: 37.7749 };
/// let b = Coord { x: -122.4194, y: 37.7849 };
/// let d = distance_meters(a, b);
/// // One hundredth of a degree of latitude is roughly 1.11 km.
/// assert!((d - 1_112.0).abs() < 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "spherical trigonometry is inherently floating point"
)]
pub fn distance_meters(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Smallest absolute angular difference between two bearings, in degrees
/// `[0, 180]`.
///
/// # Examples
/// ```
/// use brewfind_core::geo_math::angular_delta_degrees;
///
/// assert_eq!(angular_delta_degrees(350.0, 10.0), 20.0);
/// assert_eq!(angular_delta_degrees(90.0, 270.0), 180.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "angle wrapping requires modular float arithmetic"
)]
pub fn angular_delta_degrees(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}
