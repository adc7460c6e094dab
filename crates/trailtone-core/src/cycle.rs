//! Single-cycle waveform synthesis from a normalized signal.

use crate::error::{ConvertError, ConvertResult};
use crate::interp::{linspace, resample_cubic, resample_linear};
use crate::render::MAX_RENDER_SECONDS;
use crate::signal::Signal;
use crate::smooth::{savgol_wrap, window_length};

/// Peak value of a 16-bit sample.
pub const PCM16_PEAK: f64 = 32767.0;

/// Renders one period of the signal as 16-bit samples at `frequency`.
///
/// The sparse signal is densified by linear interpolation onto `2n + 1`
/// evenly spaced points, smoothed with a wrap-around quadratic
/// Savitzky-Golay filter so the cycle loops seamlessly, then
/// cubic-resampled onto `round(sample_rate / frequency)` audio-rate points
/// spanning one period. Amplitude is scaled by `32767 / max(1, peak)`:
/// signals already within [-1, 1] are never amplified, only clipping peaks
/// are attenuated.
pub fn render_cycle(signal: &Signal, frequency: f64, sample_rate: u32) -> ConvertResult<Vec<i16>> {
    if sample_rate == 0 {
        return Err(ConvertError::InvalidSampleRate { rate: sample_rate });
    }
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(ConvertError::InvalidFrequency { freq: frequency });
    }

    let samples_per_cycle = (f64::from(sample_rate) / frequency).round();
    if samples_per_cycle < 2.0 {
        // Above Nyquist there is no cycle to speak of.
        return Err(ConvertError::InvalidFrequency { freq: frequency });
    }
    if samples_per_cycle > f64::from(sample_rate) * MAX_RENDER_SECONDS {
        // A single cycle may not exceed the overall render budget; a near-zero
        // frequency would otherwise ask for an astronomically large buffer.
        return Err(ConvertError::InvalidFrequency { freq: frequency });
    }
    let samples_per_cycle = samples_per_cycle as usize;

    // Densify before smoothing; sparse tours alias badly otherwise.
    let dense_grid = linspace(0.0, 1.0, signal.len() * 2 + 1);
    let dense = resample_linear(&signal.x, &signal.y, &dense_grid);

    // x = 0 and x = 1 are the same phase, so the dense series carries the
    // cycle start twice. Smooth the periodic core without the duplicate,
    // then close the cycle again; the rendered waveform then meets itself
    // exactly at the loop boundary.
    let window = window_length(dense.len());
    let mut smoothed = savgol_wrap(&dense[..dense.len() - 1], window);
    smoothed.push(smoothed[0]);

    // One period of the tuned waveform: rescale the axis so 1.0 is one
    // period, then resample onto the audio-rate grid.
    let period = 1.0 / frequency;
    let phase_axis: Vec<f64> = dense_grid.iter().map(|x| x * period).collect();
    let cycle_grid = linspace(0.0, period, samples_per_cycle);
    let cycle = resample_cubic(&phase_axis, &smoothed, &cycle_grid);

    let peak = cycle.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let scale = PCM16_PEAK / peak.max(1.0);

    Ok(cycle.iter().map(|v| (v * scale) as i16).collect())
}
