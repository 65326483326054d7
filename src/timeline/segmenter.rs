use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    timeline::segment::{SegmentKind, TimelineSegment},
};

/// Frame lengths that drive segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineSpec {
    /// `H`
    pub hook_frames: u64,
    /// `T`
    pub title_frames: u64,
    /// `P`
    pub point_frames: u64,
    /// `n`
    pub point_count: usize,
    /// `D`
    pub total_frames: u64,
}

/// Pre-computed, non-looping linear timeline. Segments are stored in start order and tile
/// `[0, duration)` exactly.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
    duration: u64,
}

/// Partition `spec.total_frames` into hook, title, `n` points, and a CTA that absorbs the rest.
///
/// Fails with a configuration error if the CTA would be empty or negative, or if any fixed
/// segment would have zero length.
pub fn segment(spec: &TimelineSpec) -> ReelResult<Timeline> {
    let TimelineSpec {
        hook_frames: h,
        title_frames: t,
        point_frames: p,
        point_count: n,
        total_frames: d,
    } = *spec;

    if h == 0 {
        return Err(ReelError::configuration("hook duration must be > 0 frames"));
    }
    if t == 0 {
        return Err(ReelError::configuration("title duration must be > 0 frames"));
    }
    if n > 0 && p == 0 {
        return Err(ReelError::configuration("point duration must be > 0 frames"));
    }

    let points_total = (n as u64)
        .checked_mul(p)
        .ok_or_else(|| ReelError::configuration("point durations overflow"))?;
    let cta_start = h
        .checked_add(t)
        .and_then(|x| x.checked_add(points_total))
        .ok_or_else(|| ReelError::configuration("segment durations overflow"))?;
    if cta_start >= d {
        return Err(ReelError::configuration(format!(
            "hook + title + {n} points need {cta_start} frames, leaving no room for the CTA \
             in a {d}-frame composition"
        )));
    }

    let mut segments = Vec::with_capacity(n + 3);
    let mut push = |kind: SegmentKind, start: u64, end: u64| -> ReelResult<()> {
        segments.push(TimelineSegment {
            kind,
            range: FrameRange::new(FrameIndex(start), FrameIndex(end))?,
        });
        Ok(())
    };

    push(SegmentKind::Hook, 0, h)?;
    push(SegmentKind::Title, h, h + t)?;
    let points_start = h + t;
    for i in 0..n {
        let start = points_start + (i as u64) * p;
        push(SegmentKind::Point(i), start, start + p)?;
    }
    push(SegmentKind::CallToAction, cta_start, d)?;

    Timeline::from_segments(segments, d)
}

impl Timeline {
    /// Wrap pre-built segments after checking that they tile `[0, duration)`.
    pub fn from_segments(segments: Vec<TimelineSegment>, duration: u64) -> ReelResult<Self> {
        let timeline = Self { segments, duration };
        timeline.check_tiling()?;
        Ok(timeline)
    }

    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Number of point segments.
    pub fn point_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s.kind, SegmentKind::Point(_)))
            .count()
    }

    /// Segment covering `frame`, or `None` at or past the end.
    pub fn segment_at(&self, frame: FrameIndex) -> Option<&TimelineSegment> {
        let idx = self
            .segments
            .partition_point(|s| s.range.start.0 <= frame.0)
            .checked_sub(1)?;
        let seg = &self.segments[idx];
        seg.contains(frame).then_some(seg)
    }

    /// Position of `frame`'s segment in [`Timeline::segments`].
    pub fn segment_index_at(&self, frame: FrameIndex) -> Option<usize> {
        let idx = self
            .segments
            .partition_point(|s| s.range.start.0 <= frame.0)
            .checked_sub(1)?;
        self.segments[idx].contains(frame).then_some(idx)
    }

    /// Verify no gaps, no overlaps, no empty segments, and full coverage of `[0, duration)`.
    pub fn check_tiling(&self) -> ReelResult<()> {
        let mut cursor = 0u64;
        for seg in &self.segments {
            if seg.range.start.0 != cursor {
                let what = if seg.range.start.0 > cursor {
                    "gap"
                } else {
                    "overlap"
                };
                return Err(ReelError::configuration(format!(
                    "timeline {what} at frame {cursor} before segment {}",
                    seg.kind.label()
                )));
            }
            if seg.range.is_empty() {
                return Err(ReelError::configuration(format!(
                    "segment {} has zero length",
                    seg.kind.label()
                )));
            }
            cursor = seg.range.end.0;
        }
        if cursor != self.duration {
            return Err(ReelError::configuration(format!(
                "timeline covers {cursor} frames but composition lasts {}",
                self.duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segmenter.rs"]
mod tests;
