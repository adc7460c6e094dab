//! Planar 2D distance between waypoints.

use crate::track::Waypoint;

/// Meters per degree of latitude on the WGS84 equatorial sphere
/// (6378137 m * pi / 180).
const METERS_PER_DEGREE: f64 = 6378137.0 * std::f64::consts::PI / 180.0;

/// Planar (equirectangular) 2D distance between two waypoints, in meters.
///
/// Longitude differences are scaled by the cosine of the first point's
/// latitude. Accurate for the short hops between consecutive track points;
/// elevation is deliberately ignored, the profile carries it separately.
pub fn planar_distance(a: &Waypoint, b: &Waypoint) -> f64 {
    let coef = a.lat.to_radians().cos();
    let x = a.lat - b.lat;
    let y = (a.lon - b.lon) * coef;
    (x * x + y * y).sqrt() * METERS_PER_DEGREE
}
