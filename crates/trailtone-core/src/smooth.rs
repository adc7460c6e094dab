//! Savitzky-Golay smoothing with a periodic boundary.
//!
//! The single-cycle waveform must loop seamlessly, so the smoothing window
//! wraps around the ends of the series: phase 0 and phase 1 are the same
//! point of the cycle.

/// Smoothing window for a series of `len` samples: 101 for long series,
/// otherwise roughly 10% of the length, always odd and at least 3.
pub fn window_length(len: usize) -> usize {
    let window = if len > 400 {
        101
    } else {
        let approx = len / 10;
        if approx % 2 == 0 {
            approx + 1
        } else {
            approx
        }
    };
    window.max(3)
}

/// Applies a quadratic Savitzky-Golay filter with wrap-around boundary.
///
/// `window` must be odd, at least 3, and no longer than the series. The
/// degree-2 least-squares fit over a symmetric window has the closed-form
/// convolution weights
/// `w_i = (3(3m^2 + 3m - 1) - 15 i^2) / ((2m-1)(2m+1)(2m+3))`
/// for offsets `i` in `-m..=m`, window length `2m + 1`.
pub fn savgol_wrap(samples: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window % 2 == 1 && window >= 3);
    debug_assert!(window <= samples.len());

    let n = samples.len();
    let m = (window / 2) as i64;
    let weights = quadratic_weights(m);

    (0..n as i64)
        .map(|center| {
            weights
                .iter()
                .enumerate()
                .map(|(k, w)| {
                    let offset = k as i64 - m;
                    let index = (center + offset).rem_euclid(n as i64) as usize;
                    w * samples[index]
                })
                .sum::<f64>()
        })
        .collect()
}

/// Closed-form convolution weights for a quadratic fit over `2m + 1` points.
fn quadratic_weights(m: i64) -> Vec<f64> {
    let norm = ((2 * m - 1) * (2 * m + 1) * (2 * m + 3)) as f64;
    let base = 3 * (3 * m * m + 3 * m - 1);
    (-m..=m)
        .map(|i| (base - 15 * i * i) as f64 / norm)
        .collect()
}
