//! Track, segment, and waypoint types.

use serde::{Deserialize, Serialize};

/// A single recorded point: geographic position plus elevation in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}

impl Waypoint {
    /// Creates a waypoint from latitude, longitude, and elevation.
    pub fn new(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation,
        }
    }

    /// Returns true if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.elevation.is_finite()
    }
}

/// One continuous recording: an ordered list of waypoints.
///
/// Recordings are often split into several segments (pauses, lost GPS fix);
/// a [`Track`] stitches them back together with a seam offset when the
/// elevation profile is derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Ordered waypoints of this segment.
    pub points: Vec<Waypoint>,
}

impl Segment {
    /// Creates a segment from a list of waypoints.
    pub fn new(points: Vec<Waypoint>) -> Self {
        Self { points }
    }

    /// Number of waypoints in the segment.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the segment has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A whole recorded tour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the tour.
    #[serde(default)]
    pub name: String,
    /// Recording segments in order.
    pub segments: Vec<Segment>,
}

impl Track {
    /// Creates a track from a name and segments.
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }
}
