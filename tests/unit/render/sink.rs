use super::*;
use crate::{
    brand::registry::BrandRegistry, composition::assembler::Composer,
    composition::config::ReelConfig, foundation::core::FrameIndex,
};

fn frames(n: u64) -> Vec<FrameDescriptor> {
    let c = Composer::new(
        &BrandRegistry::builtin(),
        "menopause_planner",
        &ReelConfig::default(),
        None,
    )
    .unwrap();
    (0..n).map(|f| c.render(FrameIndex(f)).unwrap()).collect()
}

fn cfg() -> SinkConfig {
    SinkConfig {
        brand_id: "menopause_planner".to_owned(),
        canvas: Canvas::default(),
        fps: Fps::default(),
        duration_frames: 450,
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    for f in frames(3) {
        sink.push_frame(&f).unwrap();
    }
    sink.end().unwrap();
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().duration_frames, 450);
    let got: Vec<u64> = sink.frames().iter().map(|f| f.frame.0).collect();
    assert_eq!(got, vec![0, 1, 2]);

    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn json_lines_sink_writes_one_parseable_line_per_frame() {
    let mut sink = JsonLinesSink::new(Vec::<u8>::new());
    sink.begin(cfg()).unwrap();
    for f in frames(4) {
        sink.push_frame(&f).unwrap();
    }
    sink.end().unwrap();
    assert_eq!(sink.written(), 4);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for (i, line) in lines.iter().enumerate() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["frame"], serde_json::json!(i));
        assert_eq!(v["chrome"]["watermark"], "@MenopausePlanner");
    }
}
