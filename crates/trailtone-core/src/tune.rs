//! Tune resolution: note names or raw frequencies to Hz.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// Reference pitch in Hz (concert A).
pub const TUNE_A: f64 = 440.0;

/// The canonical note names accepted by [`Tune::Note`], in semitone order.
///
/// Sharp and flat spellings alias to the same semitone offset.
pub const NOTE_NAMES: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

/// The target pitch of a rendered waveform.
///
/// Serialized untagged, so JSON options accept either `"tune": "Eb"` or
/// `"tune": 329.63`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tune {
    /// Frequency in Hz.
    Frequency(f64),
    /// Symbolic note name, one of [`NOTE_NAMES`].
    Note(String),
}

impl Default for Tune {
    fn default() -> Self {
        Tune::Note("C".to_string())
    }
}

impl Tune {
    /// Resolves the tune to a frequency in Hz.
    ///
    /// Note names map to semitone offsets from A = 440 Hz; raw frequencies
    /// pass through unchanged. Non-positive or non-finite frequencies and
    /// unknown note names are rejected.
    pub fn frequency(&self) -> ConvertResult<f64> {
        match self {
            Tune::Frequency(freq) => {
                if !freq.is_finite() || *freq <= 0.0 {
                    return Err(ConvertError::InvalidFrequency { freq: *freq });
                }
                Ok(*freq)
            }
            Tune::Note(name) => {
                let offset = semitone_offset(name).ok_or_else(|| ConvertError::UnknownNote {
                    name: name.clone(),
                })?;
                Ok(TUNE_A * 2.0_f64.powf(f64::from(offset) / 12.0))
            }
        }
    }
}

impl From<f64> for Tune {
    fn from(freq: f64) -> Self {
        Tune::Frequency(freq)
    }
}

impl From<&str> for Tune {
    fn from(name: &str) -> Self {
        Tune::Note(name.to_string())
    }
}

/// Semitone offset of a note name relative to A, or None if unknown.
///
/// Case and accidental spelling are significant: `"Eb"` is valid, `"eb"`
/// and `"E♭"` are not.
fn semitone_offset(name: &str) -> Option<i8> {
    let offset = match name {
        "C" => -9,
        "C#" | "Db" => -8,
        "D" => -7,
        "D#" | "Eb" => -6,
        "E" => -5,
        "F" => -4,
        "F#" | "Gb" => -3,
        "G" => -2,
        "G#" | "Ab" => -1,
        "A" => 0,
        "A#" | "Bb" => 1,
        "B" => 2,
        _ => return None,
    };
    Some(offset)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_concert_a_is_exact() {
        assert_eq!(Tune::from("A").frequency().unwrap(), 440.0);
    }

    #[test]
    fn test_middle_c() {
        let freq = Tune::from("C").frequency().unwrap();
        assert!((freq - 440.0 * 2.0_f64.powf(-9.0 / 12.0)).abs() < 1e-12);
        assert!((freq - 261.625_565).abs() < 1e-3);
    }

    #[test]
    fn test_enharmonic_aliases() {
        for (sharp, flat) in [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")]
        {
            assert_eq!(
                Tune::from(sharp).frequency().unwrap(),
                Tune::from(flat).frequency().unwrap()
            );
        }
    }

    #[test]
    fn test_all_canonical_names_resolve() {
        for name in NOTE_NAMES {
            assert!(Tune::from(name).frequency().is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn test_raw_frequency_passes_through() {
        assert_eq!(Tune::from(123.456).frequency().unwrap(), 123.456);
    }

    #[test]
    fn test_unknown_note_is_rejected() {
        let err = Tune::from("H").frequency().unwrap_err();
        assert!(matches!(err, ConvertError::UnknownNote { .. }));

        // Lowercase and unicode accidentals are not canonical.
        assert!(Tune::from("c").frequency().is_err());
        assert!(Tune::from("E♭").frequency().is_err());
    }

    #[test]
    fn test_non_positive_frequency_is_rejected() {
        assert!(Tune::from(0.0).frequency().is_err());
        assert!(Tune::from(-440.0).frequency().is_err());
        assert!(Tune::from(f64::NAN).frequency().is_err());
    }

    #[test]
    fn test_untagged_serde_accepts_string_or_number() {
        let note: Tune = serde_json::from_str("\"Eb\"").unwrap();
        assert_eq!(note, Tune::Note("Eb".to_string()));

        let freq: Tune = serde_json::from_str("329.63").unwrap();
        assert_eq!(freq, Tune::Frequency(329.63));
    }
}
