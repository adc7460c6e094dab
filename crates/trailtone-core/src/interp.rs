//! Interpolation kernels over monotonic, possibly non-uniform grids.
//!
//! Linear interpolation densifies sparse profiles before smoothing; cubic
//! Hermite interpolation (Catmull-Rom tangents from centered finite
//! differences) does the audio-rate resampling, where first-derivative
//! continuity keeps the rendered cycle free of corners.

/// Evaluates the piecewise-linear curve through `(x, y)` at every point of
/// `grid`.
///
/// `x` must be non-decreasing with at least 2 samples; `grid` points outside
/// `[x[0], x[n-1]]` clamp to the boundary values. Both preconditions are
/// upheld by the callers in this crate, which construct the grids themselves.
pub fn resample_linear(x: &[f64], y: &[f64], grid: &[f64]) -> Vec<f64> {
    debug_assert_eq!(x.len(), y.len());
    debug_assert!(x.len() >= 2);

    let mut seg = 0;
    grid.iter()
        .map(|&t| {
            seg = advance_segment(x, t, seg);
            let h = x[seg + 1] - x[seg];
            if h == 0.0 {
                return y[seg];
            }
            let u = ((t - x[seg]) / h).clamp(0.0, 1.0);
            y[seg] + u * (y[seg + 1] - y[seg])
        })
        .collect()
}

/// Evaluates a cubic Hermite curve through `(x, y)` at every point of `grid`.
///
/// Tangents are Catmull-Rom style centered finite differences, one-sided at
/// the endpoints. Same grid preconditions as [`resample_linear`].
pub fn resample_cubic(x: &[f64], y: &[f64], grid: &[f64]) -> Vec<f64> {
    debug_assert_eq!(x.len(), y.len());
    debug_assert!(x.len() >= 2);

    let tangents = finite_difference_tangents(x, y);

    let mut seg = 0;
    grid.iter()
        .map(|&t| {
            seg = advance_segment(x, t, seg);
            let h = x[seg + 1] - x[seg];
            if h == 0.0 {
                return y[seg];
            }
            let u = ((t - x[seg]) / h).clamp(0.0, 1.0);
            hermite(y[seg], y[seg + 1], tangents[seg] * h, tangents[seg + 1] * h, u)
        })
        .collect()
}

/// Cubic Hermite basis evaluation on a unit interval.
fn hermite(a: f64, b: f64, tangent_a: f64, tangent_b: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * a + h10 * tangent_a + h01 * b + h11 * tangent_b
}

/// Centered finite-difference slopes, one-sided at the boundaries.
fn finite_difference_tangents(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let slope = |i: usize, j: usize| {
        let h = x[j] - x[i];
        if h == 0.0 {
            0.0
        } else {
            (y[j] - y[i]) / h
        }
    };

    let mut tangents = Vec::with_capacity(n);
    tangents.push(slope(0, 1));
    for i in 1..n - 1 {
        let h = x[i + 1] - x[i - 1];
        if h == 0.0 {
            tangents.push(0.0);
        } else {
            tangents.push((y[i + 1] - y[i - 1]) / h);
        }
    }
    tangents.push(slope(n - 2, n - 1));
    tangents
}

/// Finds the segment index `i` with `x[i] <= t <= x[i+1]`, resuming from a
/// previous hit. Grid queries arrive sorted, so this walk is linear overall.
fn advance_segment(x: &[f64], t: f64, hint: usize) -> usize {
    let last = x.len() - 2;
    let mut seg = hint.min(last);
    while seg < last && t > x[seg + 1] {
        seg += 1;
    }
    seg
}

/// Returns `count` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    // Accumulated rounding must not push the last point off the endpoint;
    // downstream grids rely on hitting it exactly.
    points[count - 1] = end;
    points
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_linear_recovers_a_line() {
        let x = [0.0, 1.0, 3.0, 4.0];
        let y = [0.0, 2.0, 6.0, 8.0];
        let grid = linspace(0.0, 4.0, 9);
        let out = resample_linear(&x, &y, &grid);
        for (t, v) in grid.iter().zip(out.iter()) {
            assert!((v - 2.0 * t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linear_interpolates_between_knots() {
        let out = resample_linear(&[0.0, 1.0], &[10.0, 20.0], &[0.25, 0.5, 0.75]);
        assert_eq!(out, vec![12.5, 15.0, 17.5]);
    }

    #[test]
    fn test_cubic_passes_through_knots() {
        let x = [0.0, 0.3, 0.7, 1.0];
        let y = [0.0, 1.0, -0.5, 0.25];
        let out = resample_cubic(&x, &y, &x);
        for (got, want) in out.iter().zip(y.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cubic_is_exact_on_lines() {
        let x = [0.0, 1.0, 2.5, 4.0];
        let y = [1.0, 3.0, 6.0, 9.0];
        let grid = linspace(0.0, 4.0, 17);
        let out = resample_cubic(&x, &y, &grid);
        for (t, v) in grid.iter().zip(out.iter()) {
            assert!((v - (1.0 + 2.0 * t)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cubic_is_smooth_at_a_peak() {
        // A symmetric peak: the interpolant should overshoot the linear
        // chord strictly between knots, not kink at the peak.
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 0.0];
        let out = resample_cubic(&x, &y, &[0.5, 1.5]);
        assert!((out[0] - out[1]).abs() < 1e-12);
        assert!(out[0] > 0.5);
    }

    #[test]
    fn test_duplicate_knots_do_not_divide_by_zero() {
        let x = [0.0, 0.5, 0.5, 1.0];
        let y = [0.0, 1.0, 1.0, 0.0];
        let out = resample_linear(&x, &y, &[0.5]);
        assert!(out[0].is_finite());
        let out = resample_cubic(&x, &y, &[0.25, 0.5, 0.75]);
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_out_of_range_queries_clamp() {
        let out = resample_linear(&[0.0, 1.0], &[5.0, 7.0], &[-0.1, 1.1]);
        assert_eq!(out, vec![5.0, 7.0]);
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 1.0, 11);
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[10], 1.0);
        assert!((grid[5] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_hits_endpoint_exactly() {
        // Counts whose step is not representable still end on the endpoint.
        for count in [3, 7, 43, 101, 169] {
            let grid = linspace(0.0, 1.0 / 440.0, count);
            assert_eq!(grid[count - 1], 1.0 / 440.0, "count {count}");
        }
    }
}
