//! Derivation of distance/elevation profiles from tracks.

use crate::distance::planar_distance;
use crate::error::{TrackError, TrackResult};
use crate::track::Track;

/// A flat distance/elevation series derived from a track.
///
/// Distances are cumulative meters from the start of the tour and
/// non-decreasing across segment seams; both vectors have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationProfile {
    /// Cumulative covered 2D distance in meters.
    pub distance: Vec<f64>,
    /// Corresponding elevation in meters.
    pub elevation: Vec<f64>,
}

impl ElevationProfile {
    /// Number of samples in the profile.
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    /// Returns true if the profile has no samples.
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// Total covered distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.distance.last().copied().unwrap_or(0.0)
    }
}

impl Track {
    /// Derives the distance/elevation profile of this track.
    ///
    /// Within a segment, distances accumulate pairwise planar 2D hops.
    /// Each subsequent segment is offset by the previous running total plus
    /// the mean inter-point spacing of the previous segment, so segments
    /// never collapse onto a zero-length seam.
    pub fn elevation_profile(&self) -> TrackResult<ElevationProfile> {
        if self.segments.is_empty() {
            return Err(TrackError::EmptyTrack);
        }

        let mut distance: Vec<f64> = Vec::new();
        let mut elevation: Vec<f64> = Vec::new();

        // Offset applied to the next segment's distances.
        let mut offset = 0.0;

        for (seg_idx, segment) in self.segments.iter().enumerate() {
            if segment.len() < 2 {
                return Err(TrackError::ShortSegment {
                    index: seg_idx,
                    points: segment.len(),
                });
            }
            for (pt_idx, point) in segment.points.iter().enumerate() {
                if !point.is_finite() {
                    return Err(TrackError::NonFiniteWaypoint {
                        segment: seg_idx,
                        point: pt_idx,
                    });
                }
            }

            let mut cumulative = 0.0;
            distance.push(offset);
            elevation.push(segment.points[0].elevation);

            for pair in segment.points.windows(2) {
                cumulative += planar_distance(&pair[0], &pair[1]);
                distance.push(offset + cumulative);
                elevation.push(pair[1].elevation);
            }

            // Seam for the following segment: running total plus this
            // segment's mean spacing.
            let hops = (segment.len() - 1) as f64;
            offset += cumulative + cumulative / hops;
        }

        Ok(ElevationProfile {
            distance,
            elevation,
        })
    }
}
