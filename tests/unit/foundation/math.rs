use super::*;

#[test]
fn interpolate_clamps_both_ends() {
    assert_eq!(interpolate(-5.0, &[0.0, 10.0], &[0.0, 1.0]), 0.0);
    assert_eq!(interpolate(50.0, &[0.0, 10.0], &[0.0, 1.0]), 1.0);
    assert!((interpolate(2.5, &[0.0, 10.0], &[0.0, 1.0]) - 0.25).abs() < 1e-12);
}

#[test]
fn interpolate_multi_segment() {
    let input = [0.0, 15.0, 30.0];
    let output = [0.0, -12.0, 0.0];
    assert!((interpolate(7.5, &input, &output) + 6.0).abs() < 1e-12);
    assert!((interpolate(15.0, &input, &output) + 12.0).abs() < 1e-12);
    assert!((interpolate(22.5, &input, &output) + 6.0).abs() < 1e-12);
}

#[test]
fn interpolate_degenerate_span_takes_right_value() {
    assert_eq!(interpolate(5.0, &[0.0, 5.0, 5.0, 10.0], &[0.0, 1.0, 2.0, 3.0]), 2.0);
}

#[test]
fn ramp01_zero_window_is_complete() {
    assert_eq!(ramp01(0.0, 0.0), 1.0);
    assert_eq!(ramp01(3.0, 6.0), 0.5);
    assert_eq!(ramp01(9.0, 6.0), 1.0);
}
