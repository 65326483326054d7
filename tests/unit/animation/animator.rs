use super::*;
use crate::foundation::core::FrameRange;

fn theme() -> BrandTheme {
    BrandTheme {
        primary: Rgba8::rgb(0xe5, 0x4d, 0x3e),
        secondary: Rgba8::rgb(0xff, 0x6b, 0x5b),
        accent: Rgba8::rgb(0xff, 0xd9, 0x3d),
    }
}

fn seg(kind: SegmentKind, start: u64, end: u64) -> TimelineSegment {
    TimelineSegment {
        kind,
        range: FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap(),
    }
}

fn eval(profile: &TextProfile, s: &TimelineSegment, frame: u64, text: &str) -> ElementState {
    let theme = theme();
    let ctx = AnimCtx {
        fps: Fps::new(30, 1).unwrap(),
        frame: FrameIndex(frame),
        theme: &theme,
        profile,
    };
    animate_segment(&ctx, s, text).unwrap()
}

#[test]
fn default_profile_is_valid() {
    TextProfile::default().validate().unwrap();
}

#[test]
fn hook_words_follow_reveal_window() {
    let mut profile = TextProfile::default();
    // 27 frames of delay, then 90 frames for three words.
    profile.hook.reveal = Some(RevealTiming {
        delay_secs: 0.9,
        span_secs: 3.0,
    });
    let hook = seg(SegmentKind::Hook, 0, 150);
    let at = |f| eval(&profile, &hook, f, "Stop wasting money").active_word;
    assert_eq!(at(27), Some(0));
    assert_eq!(at(56), Some(0));
    assert_eq!(at(57), Some(1));
    assert_eq!(at(86), Some(1));
    assert_eq!(at(87), Some(2));
    assert_eq!(at(149), Some(2));
}

#[test]
fn word_styles_split_around_active_word() {
    let profile = TextProfile::default();
    let hook = seg(SegmentKind::Hook, 0, 90);
    let state = eval(&profile, &hook, 40, "one two three four");
    let active = state.active_word.unwrap();
    assert!(active > 0 && active < 3);
    for (i, w) in state.words.iter().enumerate() {
        let expected = WordPhase::classify(i, active);
        assert_eq!(w.phase, expected);
        match w.phase {
            WordPhase::Active => assert_eq!(w.highlight, Some(theme().accent)),
            WordPhase::Spoken => {
                assert_eq!(w.highlight, Some(theme().primary.with_alpha(0x70)));
                assert_eq!(w.scale, 1.0);
            }
            WordPhase::Muted => {
                assert_eq!(w.highlight, None);
                assert_eq!(w.color.a, 153);
            }
        }
    }
}

#[test]
fn entrance_is_monotone_for_every_segment_kind() {
    let profile = TextProfile::default();
    let segments = [
        seg(SegmentKind::Hook, 0, 90),
        seg(SegmentKind::Title, 90, 165),
        seg(SegmentKind::Point(0), 165, 225),
        seg(SegmentKind::Point(1), 225, 285),
        seg(SegmentKind::CallToAction, 345, 450),
    ];
    for s in &segments {
        let mut prev = eval(&profile, s, s.range.start.0, "a b c");
        for f in s.range.start.0 + 1..s.range.end.0 {
            let cur = eval(&profile, s, f, "a b c");
            assert!(cur.opacity >= prev.opacity, "{:?} opacity fell at {f}", s.kind);
            assert!(cur.scale >= prev.scale, "{:?} scale fell at {f}", s.kind);
            prev = cur;
        }
        let window = profile.motion(s.kind).entrance.window_secs;
        let rest_from = s.range.start.0 + (window * 30.0).ceil() as u64;
        for f in rest_from..s.range.end.0 {
            let cur = eval(&profile, s, f, "a b c");
            assert_eq!(cur.opacity, 1.0);
            assert_eq!(cur.scale, 1.0);
        }
    }
}

#[test]
fn points_alternate_slide_direction_and_badge_color() {
    let profile = TextProfile::default();
    let p0 = eval(&profile, &seg(SegmentKind::Point(0), 165, 225), 166, "x");
    let p1 = eval(&profile, &seg(SegmentKind::Point(1), 225, 285), 226, "x");
    assert!(p0.offset.x < 0.0);
    assert!(p1.offset.x > 0.0);

    let color_of = |e: &ElementState| match &e.decoration {
        Decoration::Point {
            badge_color,
            number,
            ..
        } => (*badge_color, *number),
        other => panic!("unexpected decoration {other:?}"),
    };
    assert_eq!(color_of(&p0), (Rgba8::rgb(0xff, 0x6b, 0x6b), 1));
    assert_eq!(color_of(&p1), (Rgba8::rgb(0x4e, 0xcd, 0xc4), 2));
    let p3 = eval(&profile, &seg(SegmentKind::Point(3), 0, 60), 10, "x");
    assert_eq!(color_of(&p3).0, Rgba8::rgb(0xff, 0x6b, 0x6b));
}

#[test]
fn badge_waits_for_its_delay() {
    let profile = TextProfile::default();
    let s = seg(SegmentKind::Point(0), 0, 60);
    let scale_at = |f| match eval(&profile, &s, f, "x").decoration {
        Decoration::Point { badge_scale, .. } => badge_scale,
        _ => unreachable!(),
    };
    assert_eq!(scale_at(0), 0.0);
    assert_eq!(scale_at(4), 0.0);
    assert!(scale_at(8) > 0.0);
    assert_eq!(scale_at(59), 1.0);
}

#[test]
fn cta_is_static_text_with_pulsing_button() {
    let profile = TextProfile::default();
    let s = seg(SegmentKind::CallToAction, 345, 450);
    let a = eval(&profile, &s, 400, "Link in Bio!");
    assert!(a.words.is_empty());
    assert_eq!(a.active_word, None);
    let Decoration::CallToAction {
        button_scale,
        glow_px,
        arrow_opacity,
        ..
    } = a.decoration
    else {
        panic!("expected CTA decoration");
    };
    assert!((0.975..=1.025).contains(&button_scale));
    assert!((6.0..=30.0).contains(&glow_px));
    assert!((0.6..=1.0).contains(&arrow_opacity));
}

#[test]
fn evaluation_is_repeatable_out_of_order() {
    let profile = TextProfile::default();
    let s = seg(SegmentKind::Title, 90, 165);
    let frames = [150u64, 91, 120, 91, 164, 90];
    let first: Vec<ElementState> = frames
        .iter()
        .map(|f| eval(&profile, &s, *f, "Life-Changing Beauty Find!"))
        .collect();
    let second: Vec<ElementState> = frames
        .iter()
        .rev()
        .map(|f| eval(&profile, &s, *f, "Life-Changing Beauty Find!"))
        .collect();
    let second: Vec<ElementState> = second.into_iter().rev().collect();
    assert_eq!(first, second);
    assert_eq!(first[1], first[3]);
}
