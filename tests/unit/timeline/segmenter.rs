use super::*;

fn spec(h: u64, t: u64, p: u64, n: usize, d: u64) -> TimelineSpec {
    TimelineSpec {
        hook_frames: h,
        title_frames: t,
        point_frames: p,
        point_count: n,
        total_frames: d,
    }
}

fn bounds(timeline: &Timeline) -> Vec<(SegmentKind, u64, u64)> {
    timeline
        .segments()
        .iter()
        .map(|s| (s.kind, s.range.start.0, s.range.end.0))
        .collect()
}

#[test]
fn fifteen_second_layout() {
    let timeline = segment(&spec(90, 75, 60, 3, 450)).unwrap();
    assert_eq!(
        bounds(&timeline),
        vec![
            (SegmentKind::Hook, 0, 90),
            (SegmentKind::Title, 90, 165),
            (SegmentKind::Point(0), 165, 225),
            (SegmentKind::Point(1), 225, 285),
            (SegmentKind::Point(2), 285, 345),
            (SegmentKind::CallToAction, 345, 450),
        ]
    );
    assert_eq!(timeline.point_count(), 3);
}

#[test]
fn valid_parameters_always_tile() {
    for h in [1u64, 7, 90] {
        for t in [1u64, 13, 75] {
            for p in [1u64, 11, 60] {
                for n in 0..6usize {
                    let used = h + t + (n as u64) * p;
                    for d in [used + 1, used + 17, used + 300] {
                        let timeline = segment(&spec(h, t, p, n, d)).unwrap();
                        timeline.check_tiling().unwrap();
                        let total: u64 = timeline.segments().iter().map(|s| s.duration()).sum();
                        assert_eq!(total, d);
                        for f in 0..d {
                            let hits = timeline
                                .segments()
                                .iter()
                                .filter(|s| s.contains(FrameIndex(f)))
                                .count();
                            assert_eq!(hits, 1, "frame {f} covered {hits} times");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn cta_without_room_is_rejected() {
    let err = segment(&spec(90, 75, 60, 3, 345)).unwrap_err();
    assert!(matches!(err, ReelError::Configuration(_)));
    assert!(segment(&spec(90, 75, 60, 3, 300)).is_err());
    assert!(segment(&spec(90, 75, 60, 3, 346)).is_ok());
}

#[test]
fn zero_length_fixed_segments_are_rejected() {
    assert!(segment(&spec(0, 75, 60, 3, 450)).is_err());
    assert!(segment(&spec(90, 0, 60, 3, 450)).is_err());
    assert!(segment(&spec(90, 75, 0, 3, 450)).is_err());
    // No points means the point length is irrelevant.
    assert!(segment(&spec(90, 75, 0, 0, 450)).is_ok());
}

#[test]
fn overflow_is_a_configuration_error() {
    assert!(segment(&spec(u64::MAX, 1, 1, 1, u64::MAX)).is_err());
    assert!(segment(&spec(1, 1, u64::MAX, 3, u64::MAX)).is_err());
}

#[test]
fn lookup_by_frame() {
    let timeline = segment(&spec(90, 75, 60, 3, 450)).unwrap();
    assert_eq!(
        timeline.segment_at(FrameIndex(0)).unwrap().kind,
        SegmentKind::Hook
    );
    assert_eq!(
        timeline.segment_at(FrameIndex(89)).unwrap().kind,
        SegmentKind::Hook
    );
    assert_eq!(
        timeline.segment_at(FrameIndex(90)).unwrap().kind,
        SegmentKind::Title
    );
    assert_eq!(
        timeline.segment_at(FrameIndex(284)).unwrap().kind,
        SegmentKind::Point(1)
    );
    assert_eq!(
        timeline.segment_at(FrameIndex(449)).unwrap().kind,
        SegmentKind::CallToAction
    );
    assert!(timeline.segment_at(FrameIndex(450)).is_none());
    assert_eq!(timeline.segment_index_at(FrameIndex(300)), Some(4));
}

#[test]
fn from_segments_detects_gaps_and_overlaps() {
    let seg = |kind, a, b| TimelineSegment {
        kind,
        range: FrameRange::new(FrameIndex(a), FrameIndex(b)).unwrap(),
    };
    let gap = vec![
        seg(SegmentKind::Hook, 0, 10),
        seg(SegmentKind::CallToAction, 12, 20),
    ];
    let err = Timeline::from_segments(gap, 20).unwrap_err();
    assert!(err.to_string().contains("gap"));

    let overlap = vec![
        seg(SegmentKind::Hook, 0, 10),
        seg(SegmentKind::CallToAction, 8, 20),
    ];
    let err = Timeline::from_segments(overlap, 20).unwrap_err();
    assert!(err.to_string().contains("overlap"));

    let short = vec![seg(SegmentKind::Hook, 0, 10)];
    assert!(Timeline::from_segments(short, 20).is_err());
}

#[test]
fn segment_kind_priority_order() {
    let mut kinds = vec![
        SegmentKind::CallToAction,
        SegmentKind::Point(1),
        SegmentKind::Title,
        SegmentKind::Point(0),
        SegmentKind::Hook,
    ];
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Hook,
            SegmentKind::Title,
            SegmentKind::Point(0),
            SegmentKind::Point(1),
            SegmentKind::CallToAction,
        ]
    );
}
