use crate::foundation::core::{FrameIndex, FrameRange};

/// Narrative role of a segment.
///
/// The derived ordering (`Hook < Title < Point(0) < Point(1) < … < CallToAction`) is the fixed
/// priority used whenever more than one segment has to be ordered at the same frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum SegmentKind {
    Hook,
    Title,
    Point(usize),
    CallToAction,
}

impl SegmentKind {
    pub fn label(self) -> String {
        match self {
            Self::Hook => "hook".to_owned(),
            Self::Title => "title".to_owned(),
            Self::Point(i) => format!("point{i}"),
            Self::CallToAction => "cta".to_owned(),
        }
    }
}

/// One time window of the composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TimelineSegment {
    pub kind: SegmentKind,
    pub range: FrameRange,
}

impl TimelineSegment {
    pub fn start(&self) -> FrameIndex {
        self.range.start
    }

    pub fn duration(&self) -> u64 {
        self.range.len_frames()
    }

    pub fn contains(&self, frame: FrameIndex) -> bool {
        self.range.contains(frame)
    }

    /// Segment-local frame offset of `frame`.
    pub fn local(&self, frame: FrameIndex) -> u64 {
        self.range.local(frame)
    }
}
