pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Piecewise-linear map of `x` through `input` -> `output`, clamped at both ends.
///
/// `input` must be non-decreasing and the same length as `output`. Degenerate (zero-width)
/// segments resolve to the right-hand output.
pub(crate) fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if x <= input[0] {
        return output[0];
    }
    if x >= input[n - 1] {
        return output[n - 1];
    }

    let mut i = 1;
    while i < n - 1 && x >= input[i] {
        i += 1;
    }
    let (x0, x1) = (input[i - 1], input[i]);
    let (y0, y1) = (output[i - 1], output[i]);
    let span = x1 - x0;
    if span <= 0.0 {
        return y1;
    }
    lerp(y0, y1, (x - x0) / span)
}

/// Linear 0..1 ramp over `[0, window)`; 1 once `t >= window`.
pub(crate) fn ramp01(t: f64, window: f64) -> f64 {
    if window <= 0.0 {
        return 1.0;
    }
    (t / window).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
