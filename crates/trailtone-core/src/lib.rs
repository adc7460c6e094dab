//! Trailtone Audio Core
//!
//! This crate converts a recorded route's elevation profile into an audible
//! waveform whose pitch and amplitude trace the terrain's vertical shape.
//!
//! # Overview
//!
//! The pipeline is a deterministic, offline, batch transform over in-memory
//! buffers:
//!
//! 1. [`Signal::from_profile`] normalizes a sparse distance/elevation series
//!    onto a [0, 1] distance axis and a bounded amplitude axis.
//! 2. [`cycle::render_cycle`] densifies, smooths (with a periodic boundary,
//!    so the waveform loops seamlessly), and resamples the signal into one
//!    cycle of 16-bit audio at a tuned frequency.
//! 3. [`render::constant_pitch`] loops that cycle to a requested duration;
//!    [`render::profile_following`] instead re-synthesizes every cycle at a
//!    frequency modulated by the elevation signal, one octave up at the
//!    highest point and one octave down at the lowest.
//! 4. [`WavResult::from_rendered`] assembles the buffer into WAV bytes with
//!    a BLAKE3 PCM hash for byte-level validation.
//!
//! # Determinism
//!
//! There is no randomness, no shared state, and no I/O: the same profile
//! and options always produce byte-identical audio.
//!
//! # Example
//!
//! ```
//! use trailtone_core::{profile_to_modulated_audio, RenderOptions, Tune, WavResult};
//!
//! let distance: Vec<f64> = (0..=10).map(|i| f64::from(i) * 500.0).collect();
//! let elevation = vec![
//!     400.0, 450.0, 530.0, 600.0, 640.0, 660.0, 610.0, 560.0, 480.0, 430.0, 400.0,
//! ];
//!
//! let options = RenderOptions {
//!     tune: Tune::from("A"),
//!     seconds: 2.0,
//!     ..RenderOptions::default()
//! };
//! let rendered = profile_to_modulated_audio(&distance, &elevation, &options)?;
//! let wav = WavResult::from_rendered(&rendered);
//!
//! assert!(rendered.duration_seconds() >= 1.0);
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! # Ok::<(), trailtone_core::ConvertError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`signal`] - Profile normalization
//! - [`cycle`] - Single-cycle waveform synthesis
//! - [`render`] - Constant-pitch and profile-following renderers
//! - [`tune`] - Note-name and frequency resolution
//! - [`interp`] - Interpolation kernels
//! - [`smooth`] - Periodic Savitzky-Golay smoothing
//! - [`wav`] - Deterministic WAV assembly
//! - [`error`] - Error types

pub mod cycle;
pub mod error;
pub mod interp;
pub mod render;
pub mod signal;
pub mod smooth;
pub mod tune;
pub mod wav;

// Re-export main types at crate root
pub use error::{ConvertError, ConvertResult};
pub use render::{
    constant_pitch, profile_following, profile_to_audio, profile_to_modulated_audio,
    ProfileCycles, Rendered, RenderOptions,
};
pub use signal::Signal;
pub use tune::{Tune, NOTE_NAMES};
pub use wav::WavResult;
