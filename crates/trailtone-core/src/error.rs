//! Error types for profile-to-audio conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during profile-to-audio conversion.
///
/// Variants fall into two buckets: malformed input
/// ([`is_validation`](ConvertError::is_validation)) and numeric degeneracies
/// that would otherwise surface as divisions by zero
/// ([`is_degenerate`](ConvertError::is_degenerate)).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Distance series is not sorted.
    #[error("distances must be non-decreasing, violated at index {index}")]
    DistancesNotSorted {
        /// Index of the first out-of-order sample.
        index: usize,
    },

    /// Distance and elevation series have different lengths.
    #[error("series length mismatch: {distances} distances vs {elevations} elevations")]
    LengthMismatch {
        /// Length of the distance series.
        distances: usize,
        /// Length of the elevation series.
        elevations: usize,
    },

    /// Too few samples to resample a waveform from.
    #[error("profile has {count} sample(s), need at least 3")]
    TooFewSamples {
        /// Number of samples supplied.
        count: usize,
    },

    /// A series value is NaN or infinite.
    #[error("non-finite value in {series} series at index {index}")]
    NonFiniteValue {
        /// Which series held the value ("distance" or "elevation").
        series: &'static str,
        /// Index of the value.
        index: usize,
    },

    /// Unknown note name.
    #[error(
        "unknown note name '{name}', expected one of \
         C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B"
    )]
    UnknownNote {
        /// The rejected name.
        name: String,
    },

    /// Invalid base or modulated frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Requested duration is NaN or infinite.
    #[error("invalid duration: {seconds} seconds")]
    InvalidDuration {
        /// The invalid duration.
        seconds: f64,
    },

    /// Elevation range is zero while the signal level should be maximized.
    #[error("flat profile: elevation range is zero, cannot maximize signal level")]
    FlatProfile,

    /// Total covered distance is zero.
    #[error("zero total distance, cannot normalize the distance axis")]
    ZeroDistance,
}

impl ConvertError {
    /// Returns true for malformed or inconsistent input.
    pub fn is_validation(&self) -> bool {
        !self.is_degenerate()
    }

    /// Returns true for numeric degeneracies (divide-by-zero-prone input
    /// that is well-formed but unusable).
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::FlatProfile | Self::ZeroDistance)
    }
}
