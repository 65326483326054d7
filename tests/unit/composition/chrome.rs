use super::*;

#[test]
fn progress_runs_from_zero_towards_one() {
    assert_eq!(progress(FrameIndex(0), 450), 0.0);
    assert!((progress(FrameIndex(225), 450) - 0.5).abs() < 1e-12);
    assert!(progress(FrameIndex(449), 450) < 1.0);
}

#[test]
fn shapes_drift_and_breathe_around_their_anchor() {
    let accent = Rgba8::rgb(0xff, 0xd9, 0x3d);
    for shape in AccentShape::defaults() {
        shape.validate().unwrap();
        let at0 = shape.sample(FrameIndex(0), accent);
        assert_eq!(at0.position, Vec2::new(shape.x, shape.y));
        assert_eq!(at0.scale, 1.0);
        for f in [1u64, 50, 133, 449] {
            let s = shape.sample(FrameIndex(f), accent);
            assert!((s.position.y - shape.y).abs() <= 40.0);
            assert!((s.scale - 1.0).abs() <= 0.08);
            assert_eq!(s.position.x, shape.x);
            assert_eq!(s.color, accent);
        }
    }
}

#[test]
fn chrome_carries_watermark_and_all_shapes() {
    let chrome = sample_chrome(
        FrameIndex(10),
        450,
        &AccentShape::defaults(),
        Rgba8::WHITE,
        "DailyDealDarling",
    );
    assert_eq!(chrome.watermark, "@DailyDealDarling");
    assert_eq!(chrome.shapes.len(), 3);
}

#[test]
fn invalid_shape_is_rejected() {
    let mut s = AccentShape::defaults()[0];
    s.opacity = 1.5;
    assert!(s.validate().is_err());
    s.opacity = 0.5;
    s.size_px = 0.0;
    assert!(s.validate().is_err());
}
