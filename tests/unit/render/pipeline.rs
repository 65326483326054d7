use super::*;
use crate::{
    brand::registry::BrandRegistry, composition::config::ReelConfig, render::sink::InMemorySink,
};

fn composer() -> Composer {
    Composer::new(
        &BrandRegistry::builtin(),
        "fitnessmadeasy",
        &ReelConfig::default(),
        None,
    )
    .unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn sequential_render_is_in_order_and_chunked() {
    let c = composer();
    let threading = RenderThreading {
        chunk_size: 7,
        ..RenderThreading::default()
    };
    let (frames, stats) = render_frames_with_stats(&c, range(10, 40), &threading).unwrap();
    let idx: Vec<u64> = frames.iter().map(|f| f.frame.0).collect();
    assert_eq!(idx, (10..40).collect::<Vec<_>>());
    assert_eq!(stats.frames_total, 30);
    assert_eq!(stats.chunks, 5);
}

#[test]
fn parallel_matches_sequential() {
    let c = composer();
    let seq = render_frames_with_stats(&c, range(80, 200), &RenderThreading::default()).unwrap();
    let par = render_frames_with_stats(
        &c,
        range(80, 200),
        &RenderThreading {
            parallel: true,
            chunk_size: 16,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.0, par.0);
    assert_eq!(seq.1.digest, par.1.digest);
}

#[test]
fn zero_chunk_size_is_treated_as_one() {
    let c = composer();
    let threading = RenderThreading {
        chunk_size: 0,
        ..RenderThreading::default()
    };
    let (_, stats) = render_frames_with_stats(&c, range(0, 3), &threading).unwrap();
    assert_eq!(stats.chunks, 3);
}

#[test]
fn rejects_bad_ranges_and_thread_counts() {
    let c = composer();
    let t = RenderThreading::default();
    assert!(render_frames(&c, range(5, 5), &t).is_err());
    assert!(render_frames(&c, range(440, 451), &t).is_err());
    assert!(build_thread_pool(Some(0)).is_err());
    let zero_threads = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_frames(&c, range(0, 2), &zero_threads).is_err());
}

#[test]
fn sink_receives_begin_frames_end() {
    let c = composer();
    let mut sink = InMemorySink::new();
    let stats =
        render_range_to_sink(&c, full_range(&c), &RenderThreading::default(), &mut sink).unwrap();
    assert_eq!(stats.frames_total, 450);
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!(cfg.brand_id, "fitnessmadeasy");
    assert_eq!(cfg.duration_frames, 450);
    assert_eq!(sink.frames().len(), 450);
    assert_eq!(sink.frames()[449].frame, FrameIndex(449));
}
