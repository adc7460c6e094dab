//! Error types for track handling.

use thiserror::Error;

/// Result type for track operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Errors that can occur while deriving a profile from a track.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Track contains no segments.
    #[error("track contains no segments")]
    EmptyTrack,

    /// Segment has too few points to cover any distance.
    #[error("segment {index} has {points} point(s), need at least 2")]
    ShortSegment {
        /// Index of the offending segment.
        index: usize,
        /// Number of points in the segment.
        points: usize,
    },

    /// A waypoint carries a non-finite coordinate or elevation.
    #[error("segment {segment}, point {point}: non-finite coordinate or elevation")]
    NonFiniteWaypoint {
        /// Index of the segment.
        segment: usize,
        /// Index of the point within the segment.
        point: usize,
    },
}
