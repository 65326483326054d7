use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn opacity_and_scale_never_decrease_then_rest() {
    let motions = [
        EntranceMotion::spring(100.0, 0.8, 0.6)
            .with_scale(0.6)
            .with_fade(0.25),
        EntranceMotion::spring(140.0, 1.0, 0.5)
            .with_scale(0.85)
            .with_offset(0.0, 40.0)
            .with_fade(0.2),
        EntranceMotion::spring(115.0, 1.0, 0.5).with_offset(-90.0, 0.0),
        EntranceMotion::spring(95.0, 1.0, 0.6).with_scale(0.55),
    ];
    let fps = fps30();
    for m in motions {
        m.validate().unwrap();
        let window_frames = fps.secs_to_frames(m.window_secs).ceil() as u32;
        let mut prev = m.sample(fps, 0.0);
        for f in 1..=window_frames {
            let cur = m.sample(fps, f64::from(f));
            assert!(cur.opacity >= prev.opacity, "{m:?} opacity fell at {f}");
            assert!(cur.scale >= prev.scale, "{m:?} scale fell at {f}");
            assert!(cur.offset.hypot() <= prev.offset.hypot() + 1e-12);
            prev = cur;
        }
        for f in window_frames..window_frames + 60 {
            let rest = m.sample(fps, f64::from(f));
            assert_eq!(rest.opacity, 1.0);
            assert_eq!(rest.scale, 1.0);
            assert_eq!(rest.offset, Vec2::ZERO);
        }
    }
}

#[test]
fn starts_from_configured_pose() {
    let m = EntranceMotion::spring(140.0, 1.0, 0.5)
        .with_scale(0.85)
        .with_offset(0.0, 40.0);
    let e = m.sample(fps30(), 0.0);
    assert_eq!(e.progress, 0.0);
    assert_eq!(e.opacity, 0.0);
    assert!((e.scale - 0.85).abs() < 1e-12);
    assert_eq!(e.offset, Vec2::new(0.0, 40.0));
}

#[test]
fn linear_fade_completes_before_window() {
    let m = EntranceMotion::spring(100.0, 0.8, 0.6).with_fade(0.25);
    let fps = fps30();
    assert!((m.sample(fps, 3.75).opacity - 0.5).abs() < 1e-12);
    assert_eq!(m.sample(fps, 7.5).opacity, 1.0);
    assert!(m.sample(fps, 7.5).progress < 1.0);
}

#[test]
fn validation_guards_monotonicity() {
    let base = EntranceMotion::spring(100.0, 1.0, 0.5);
    assert!(base.with_scale(1.4).validate().is_err());
    assert!(base.with_scale(0.0).validate().is_err());
    assert!(base.with_fade(0.9).validate().is_err());
    assert!(
        EntranceMotion {
            window_secs: 0.0,
            ..base
        }
        .validate()
        .is_err()
    );
    assert!(base.with_scale(1.0).with_fade(0.5).validate().is_ok());
}
