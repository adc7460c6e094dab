//! Rendering of normalized signals into audio buffers.
//!
//! Two modes: constant pitch (one tuned cycle, looped to the requested
//! duration) and profile following (the playback frequency itself tracks
//! the elevation signal, cycle by cycle).

use serde::{Deserialize, Serialize};

use crate::cycle::render_cycle;
use crate::error::{ConvertError, ConvertResult};
use crate::interp::resample_cubic;
use crate::signal::Signal;
use crate::tune::Tune;

/// Upper bound on the requested duration, to keep a single call from
/// allocating without limit.
pub const MAX_RENDER_SECONDS: f64 = 3600.0;

/// Options for a render call.
///
/// All fields have defaults, so JSON options can specify any subset:
/// `{ "tune": "Eb", "seconds": 10 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Amplitude reference scale in meters of elevation difference.
    /// `<= 0` always maximizes the signal level.
    pub max_elevation_difference: f64,
    /// Target pitch: note name or frequency in Hz.
    pub tune: Tune,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Approximate length of the rendered audio in seconds. The output is
    /// rounded up to whole cycles; `<= 0` renders exactly one cycle.
    pub seconds: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_elevation_difference: 0.0,
            tune: Tune::default(),
            sample_rate: 44100,
            seconds: 1.0,
        }
    }
}

/// A rendered audio buffer: 16-bit mono samples plus their sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Signed 16-bit samples.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl Rendered {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration of the buffer in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}

/// Renders the signal at a constant pitch.
///
/// With `seconds <= 0` the single tuned cycle is returned verbatim.
/// Otherwise the cycle is copied whole until the buffer reaches
/// `sample_rate * seconds` samples; the result may exceed the requested
/// duration by up to one cycle and is never truncated, so it always loops
/// cleanly.
pub fn constant_pitch(signal: &Signal, options: &RenderOptions) -> ConvertResult<Rendered> {
    let frequency = options.tune.frequency()?;
    validate_duration(options.seconds)?;

    let cycle = render_cycle(signal, frequency, options.sample_rate)?;
    let copies = copies_for_duration(cycle.len(), options.sample_rate, options.seconds);

    let mut samples = Vec::with_capacity(cycle.len() * copies);
    for _ in 0..copies {
        samples.extend_from_slice(&cycle);
    }

    Ok(Rendered {
        samples,
        sample_rate: options.sample_rate,
    })
}

/// Renders the signal with its pitch following the elevation profile.
///
/// Each cycle `k` is re-synthesized at `base * 2^y(k)`, one octave up at
/// y = +1 and one octave down at y = -1, so the perceived pitch rises and
/// falls with the terrain over the course of the rendered duration.
pub fn profile_following(signal: &Signal, options: &RenderOptions) -> ConvertResult<Rendered> {
    let mut samples = Vec::new();
    for cycle in profile_cycles(signal, options)? {
        samples.extend_from_slice(&cycle?);
    }

    Ok(Rendered {
        samples,
        sample_rate: options.sample_rate,
    })
}

/// Returns the lazy sequence of modulated cycles behind
/// [`profile_following`].
///
/// Each item is one rendered cycle; cycle lengths vary with the modulated
/// frequency. Useful for streaming consumers that do not want the whole
/// buffer in memory at once.
pub fn profile_cycles(signal: &Signal, options: &RenderOptions) -> ConvertResult<ProfileCycles> {
    let base = options.tune.frequency()?;
    validate_duration(options.seconds)?;

    // How many base-pitch cycles the constant renderer would need; the
    // modulated render emits the same number of (variable-length) cycles.
    // At least one cycle is always rendered.
    let cycle_len = render_cycle(signal, base, options.sample_rate)?.len();
    let copies = copies_for_duration(cycle_len, options.sample_rate, options.seconds);

    // Frequency scalar 2^y, cubic-interpolated over the x-axis tiled across
    // all copies: cycle k samples the curve at position k.
    let scalar: Vec<f64> = signal.y.iter().map(|y| 2.0_f64.powf(*y)).collect();
    let tiled_x: Vec<f64> = signal.x.iter().map(|x| x * copies as f64).collect();
    let positions: Vec<f64> = (0..copies).map(|k| k as f64).collect();
    let frequencies = resample_cubic(&tiled_x, &scalar, &positions)
        .into_iter()
        .map(|s| base * s)
        .collect();

    Ok(ProfileCycles {
        signal: signal.clone(),
        frequencies,
        sample_rate: options.sample_rate,
        next: 0,
    })
}

/// Lazy iterator over the cycles of a profile-following render.
#[derive(Debug)]
pub struct ProfileCycles {
    signal: Signal,
    frequencies: Vec<f64>,
    sample_rate: u32,
    next: usize,
}

impl ProfileCycles {
    /// Number of cycles this iterator will yield in total.
    pub fn num_cycles(&self) -> usize {
        self.frequencies.len()
    }

    /// The modulated frequency of each cycle, in Hz.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
}

impl Iterator for ProfileCycles {
    type Item = ConvertResult<Vec<i16>>;

    fn next(&mut self) -> Option<Self::Item> {
        let frequency = *self.frequencies.get(self.next)?;
        self.next += 1;
        Some(render_cycle(&self.signal, frequency, self.sample_rate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frequencies.len() - self.next;
        (remaining, Some(remaining))
    }
}

/// Normalizes a raw profile and renders it at constant pitch.
pub fn profile_to_audio(
    distance: &[f64],
    elevation: &[f64],
    options: &RenderOptions,
) -> ConvertResult<Rendered> {
    let signal = Signal::from_profile(distance, elevation, options.max_elevation_difference)?;
    constant_pitch(&signal, options)
}

/// Normalizes a raw profile and renders it with profile-following pitch.
pub fn profile_to_modulated_audio(
    distance: &[f64],
    elevation: &[f64],
    options: &RenderOptions,
) -> ConvertResult<Rendered> {
    let signal = Signal::from_profile(distance, elevation, options.max_elevation_difference)?;
    profile_following(&signal, options)
}

/// Whole-cycle copies needed to reach `sample_rate * seconds` samples,
/// never fewer than one.
fn copies_for_duration(cycle_len: usize, sample_rate: u32, seconds: f64) -> usize {
    if seconds <= 0.0 {
        return 1;
    }
    let required = f64::from(sample_rate) * seconds;
    let copies = (required / cycle_len as f64).ceil() as usize;
    copies.max(1)
}

fn validate_duration(seconds: f64) -> ConvertResult<()> {
    if seconds.is_nan() || seconds > MAX_RENDER_SECONDS {
        return Err(ConvertError::InvalidDuration { seconds });
    }
    Ok(())
}
