use crate::{
    foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Transform2D, Vec2},
    foundation::error::{ReelError, ReelResult},
    foundation::math::{lerp, ramp01},
    timeline::segment::SegmentKind,
    timeline::segmenter::Timeline,
};

/// Start/end pose of the slow pan and zoom applied to one background image.
///
/// Translation is in percent of the canvas, applied before the scale (CSS
/// `scale(s) translate(x%, y%)` about the canvas center).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KenBurns {
    pub start_scale: f64,
    pub end_scale: f64,
    pub start_x: f64,
    pub end_x: f64,
    pub start_y: f64,
    pub end_y: f64,
}

impl KenBurns {
    const fn new(scale: (f64, f64), x: (f64, f64), y: (f64, f64)) -> Self {
        Self {
            start_scale: scale.0,
            end_scale: scale.1,
            start_x: x.0,
            end_x: x.1,
            start_y: y.0,
            end_y: y.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlideshowMotion {
    /// Opacity ramp from the moment an image becomes active.
    pub fade_secs: f64,
    /// Indexed by image index, wrapping.
    pub ken_burns: Vec<KenBurns>,
}

impl Default for SlideshowMotion {
    fn default() -> Self {
        Self {
            fade_secs: 0.3,
            ken_burns: vec![
                KenBurns::new((1.0, 1.15), (0.0, -3.0), (0.0, -2.0)),
                KenBurns::new((1.1, 1.0), (-2.0, 2.0), (-1.0, 1.0)),
                KenBurns::new((1.0, 1.12), (2.0, -2.0), (1.0, -1.0)),
                KenBurns::new((1.08, 1.0), (-1.0, 1.0), (-2.0, 2.0)),
            ],
        }
    }
}

impl SlideshowMotion {
    pub fn validate(&self) -> ReelResult<()> {
        if !self.fade_secs.is_finite() || self.fade_secs < 0.0 {
            return Err(ReelError::configuration("background fade_secs must be >= 0"));
        }
        if self.ken_burns.is_empty() {
            return Err(ReelError::configuration(
                "background ken_burns table must be non-empty",
            ));
        }
        for kb in &self.ken_burns {
            if kb.start_scale <= 0.0 || kb.end_scale <= 0.0 {
                return Err(ReelError::configuration("ken burns scales must be > 0"));
            }
        }
        Ok(())
    }

    fn ken_burns_for(&self, image_index: usize) -> ReelResult<KenBurns> {
        let n = self.ken_burns.len();
        if n == 0 {
            return Err(ReelError::configuration(
                "background ken_burns table must be non-empty",
            ));
        }
        Ok(self.ken_burns[image_index % n])
    }
}

/// Contiguous stretch of frames showing one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ImageRun {
    pub image_index: usize,
    pub range: FrameRange,
}

/// Background state at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundState {
    pub image_index: usize,
    pub source: String,
    pub opacity: f64,
    pub scale: f64,
    pub translate_pct: Vec2,
    /// Pixel-space transform about the canvas center.
    pub transform: Transform2D,
    /// `transform` as a canvas-space matrix.
    pub matrix: Affine,
}

/// Segment-scheduled slideshow with composition-wide Ken Burns motion.
#[derive(Clone, Debug)]
pub struct Slideshow {
    images: Vec<String>,
    runs: Vec<ImageRun>,
    duration: u64,
}

/// Image slot a segment asks for before wrapping to the available image count.
pub fn scheduled_slot(kind: SegmentKind) -> usize {
    match kind {
        SegmentKind::Hook | SegmentKind::CallToAction => 0,
        SegmentKind::Title => 1,
        SegmentKind::Point(i) => 2 + i % 2,
    }
}

impl Slideshow {
    pub fn new(timeline: &Timeline, images: Vec<String>) -> ReelResult<Self> {
        if images.is_empty() {
            return Err(ReelError::configuration(
                "slideshow needs at least one image",
            ));
        }

        let mut runs: Vec<ImageRun> = Vec::new();
        for seg in timeline.segments() {
            let image_index = scheduled_slot(seg.kind) % images.len();
            match runs.last_mut() {
                Some(last) if last.image_index == image_index => {
                    last.range.end = seg.range.end;
                }
                _ => runs.push(ImageRun {
                    image_index,
                    range: seg.range,
                }),
            }
        }
        tracing::debug!(runs = runs.len(), images = images.len(), "built slideshow schedule");

        Ok(Self {
            images,
            runs,
            duration: timeline.duration(),
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn runs(&self) -> &[ImageRun] {
        &self.runs
    }

    fn run_at(&self, frame: FrameIndex) -> Option<&ImageRun> {
        let idx = self
            .runs
            .partition_point(|r| r.range.start.0 <= frame.0)
            .checked_sub(1)?;
        let run = &self.runs[idx];
        run.range.contains(frame).then_some(run)
    }

    pub fn active_index(&self, frame: FrameIndex) -> Option<usize> {
        self.run_at(frame).map(|r| r.image_index)
    }

    pub fn sample(
        &self,
        fps: Fps,
        frame: FrameIndex,
        canvas: Canvas,
        motion: &SlideshowMotion,
    ) -> ReelResult<BackgroundState> {
        let run = self
            .run_at(frame)
            .ok_or_else(|| ReelError::evaluation("frame is out of bounds"))?;
        let kb = motion.ken_burns_for(run.image_index)?;

        let t = if self.duration == 0 {
            1.0
        } else {
            (frame.0 as f64 / self.duration as f64).clamp(0.0, 1.0)
        };
        let scale = lerp(kb.start_scale, kb.end_scale, t);
        let translate_pct = Vec2::new(lerp(kb.start_x, kb.end_x, t), lerp(kb.start_y, kb.end_y, t));
        let translate_px = Vec2::new(
            translate_pct.x / 100.0 * f64::from(canvas.width),
            translate_pct.y / 100.0 * f64::from(canvas.height),
        );

        let transform = Transform2D {
            translate: translate_px * scale,
            scale,
        };
        let center = Vec2::new(f64::from(canvas.width) / 2.0, f64::from(canvas.height) / 2.0);

        let since_active = run.range.local(frame) as f64 / fps.as_f64();
        Ok(BackgroundState {
            image_index: run.image_index,
            source: self.images[run.image_index].clone(),
            opacity: ramp01(since_active, motion.fade_secs),
            scale,
            translate_pct,
            transform,
            matrix: transform.to_affine(center),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/slideshow.rs"]
mod tests;
