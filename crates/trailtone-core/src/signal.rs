//! Normalization of distance/elevation profiles into bounded signals.

use crate::error::{ConvertError, ConvertResult};

/// A distance-normalized, amplitude-normalized elevation signal.
///
/// `x` spans [0, 1] (covered distance over total distance) and is
/// non-decreasing; `y` spans [-1, 1] when the signal level is maximized.
/// Under a fixed `max_elevation_difference` scale, |y| may exceed 1 where the
/// terrain deviates more than the configured cap from the mean elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Normalized covered distance, in [0, 1].
    pub x: Vec<f64>,
    /// Normalized elevation amplitude.
    pub y: Vec<f64>,
}

impl Signal {
    /// Normalizes a distance/elevation profile into a signal.
    ///
    /// With `max_elevation_difference <= 0` (the default) the amplitude is
    /// always maximized: the elevation range is mapped exactly onto [-1, 1].
    /// A positive `max_elevation_difference` fixes the amplitude scale
    /// instead: the signal is centered on the distance-weighted mean
    /// elevation and divided by the cap, so quiet tours stay quiet and only
    /// profiles whose range reaches the cap are maximized.
    ///
    /// `distance` is expected to start at 0, as every profile derived from a
    /// track does. Each x value is the covered distance over the total, so a
    /// series starting elsewhere yields a signal whose x axis starts at
    /// `distance[0] / distance[n-1]` rather than at 0.
    ///
    /// # Errors
    ///
    /// Validation: mismatched lengths, fewer than 3 samples, non-finite
    /// values, unsorted distances. Degeneracies: zero total distance, and a
    /// perfectly flat profile while maximizing (the amplitude scale would be
    /// 0/0; reported instead of guessed, see `ConvertError::FlatProfile`).
    pub fn from_profile(
        distance: &[f64],
        elevation: &[f64],
        max_elevation_difference: f64,
    ) -> ConvertResult<Self> {
        if distance.len() != elevation.len() {
            return Err(ConvertError::LengthMismatch {
                distances: distance.len(),
                elevations: elevation.len(),
            });
        }
        if distance.len() < 3 {
            return Err(ConvertError::TooFewSamples {
                count: distance.len(),
            });
        }
        for (index, d) in distance.iter().enumerate() {
            if !d.is_finite() {
                return Err(ConvertError::NonFiniteValue {
                    series: "distance",
                    index,
                });
            }
        }
        for (index, e) in elevation.iter().enumerate() {
            if !e.is_finite() {
                return Err(ConvertError::NonFiniteValue {
                    series: "elevation",
                    index,
                });
            }
        }
        for (index, pair) in distance.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(ConvertError::DistancesNotSorted { index: index + 1 });
            }
        }

        let total = distance[distance.len() - 1];
        if total <= 0.0 {
            return Err(ConvertError::ZeroDistance);
        }

        let mn = elevation.iter().copied().fold(f64::INFINITY, f64::min);
        let mx = elevation.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let diff = mx - mn;

        let maximize = diff >= max_elevation_difference;

        let y: Vec<f64> = if maximize {
            if diff == 0.0 {
                return Err(ConvertError::FlatProfile);
            }
            elevation
                .iter()
                .map(|e| (e - mn) / diff * 2.0 - 1.0)
                .collect()
        } else {
            // Center on the distance-weighted mean so the area above and
            // below the baseline cancels out.
            let mean = trapezoid_mean(distance, elevation, total);
            elevation
                .iter()
                .map(|e| (e - mean) / max_elevation_difference * 2.0)
                .collect()
        };

        let x = distance.iter().map(|d| d / total).collect();

        Ok(Self { x, y })
    }

    /// Number of samples in the signal.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Trapezoidal integral of elevation over distance, divided by the total
/// distance.
fn trapezoid_mean(distance: &[f64], elevation: &[f64], total: f64) -> f64 {
    let mut integral = 0.0;
    for i in 1..distance.len() {
        integral += (elevation[i] + elevation[i - 1]) / 2.0 * (distance[i] - distance[i - 1]);
    }
    integral / total
}
