use crate::{
    animation::animator::{AnimCtx, ElementState, animate_segment},
    audio::envelope::{AudioCue, voiceover_cue},
    background::slideshow::{BackgroundState, Slideshow},
    brand::registry::{BrandProfile, BrandRegistry},
    composition::chrome::{ChromeState, sample_chrome},
    composition::config::ReelConfig,
    content::record::{ContentOverride, ResolvedContent, resolve_content},
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
    timeline::segment::{SegmentKind, TimelineSegment},
    timeline::segmenter::{Timeline, segment},
};

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameDescriptor {
    pub frame: FrameIndex,
    pub progress: f64,
    pub background: BackgroundState,
    /// Active text elements in segment priority order.
    pub elements: Vec<ElementState>,
    pub chrome: ChromeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioCue>,
}

/// One brand's composition with its timeline and content resolved up front.
///
/// Frame evaluation takes `&self` only, so a `Composer` can be shared across render threads.
#[derive(Clone, Debug)]
pub struct Composer {
    config: ReelConfig,
    brand: BrandProfile,
    content: ResolvedContent,
    timeline: Timeline,
    slideshow: Slideshow,
}

impl Composer {
    pub fn new(
        registry: &BrandRegistry,
        brand_id: &str,
        config: &ReelConfig,
        over: Option<&ContentOverride>,
    ) -> ReelResult<Self> {
        let brand = registry.get(brand_id)?;
        let content = resolve_content(brand, over)?;
        Self::from_parts(brand.clone(), content, config.clone())
    }

    pub fn from_parts(
        brand: BrandProfile,
        content: ResolvedContent,
        config: ReelConfig,
    ) -> ReelResult<Self> {
        config.validate()?;
        let timeline = segment(&config.timeline_spec(content.content.points.len()))?;
        let slideshow = Slideshow::new(&timeline, content.images.clone())?;
        tracing::debug!(
            brand = %brand.id,
            segments = timeline.segments().len(),
            duration = timeline.duration(),
            "prepared composition"
        );
        Ok(Self {
            config,
            brand,
            content,
            timeline,
            slideshow,
        })
    }

    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    pub fn brand(&self) -> &BrandProfile {
        &self.brand
    }

    pub fn content(&self) -> &ResolvedContent {
        &self.content
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn duration(&self) -> u64 {
        self.timeline.duration()
    }

    fn text_for(&self, kind: SegmentKind) -> ReelResult<&str> {
        let c = &self.content.content;
        match kind {
            SegmentKind::Hook => Ok(&c.hook),
            SegmentKind::Title => Ok(&c.title),
            SegmentKind::Point(i) => c.points.get(i).map(String::as_str).ok_or_else(|| {
                ReelError::evaluation(format!("no content for point {i}"))
            }),
            SegmentKind::CallToAction => Ok(&c.cta),
        }
    }

    fn active_segments(&self, frame: FrameIndex) -> Vec<&TimelineSegment> {
        let mut active: Vec<&TimelineSegment> = self
            .timeline
            .segments()
            .iter()
            .filter(|s| s.contains(frame))
            .collect();
        active.sort_by_key(|s| s.kind);
        active
    }

    /// Evaluate one frame. Pure in `frame`: evaluation order and repetition do not matter.
    #[tracing::instrument(level = "trace", skip(self), fields(brand = %self.brand.id))]
    pub fn render(&self, frame: FrameIndex) -> ReelResult<FrameDescriptor> {
        let duration = self.duration();
        if frame.0 >= duration {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {duration})",
                frame.0
            )));
        }

        let cfg = &self.config;
        let ctx = AnimCtx {
            fps: cfg.fps,
            frame,
            theme: &self.brand.theme,
            profile: &cfg.motion.text,
        };
        let elements = self
            .active_segments(frame)
            .into_iter()
            .map(|seg| animate_segment(&ctx, seg, self.text_for(seg.kind)?))
            .collect::<ReelResult<Vec<_>>>()?;

        let background =
            self.slideshow
                .sample(cfg.fps, frame, cfg.canvas, &cfg.motion.background)?;
        let chrome = sample_chrome(
            frame,
            duration,
            &cfg.motion.shapes,
            self.brand.theme.accent,
            &self.brand.display_name,
        );
        let audio = voiceover_cue(
            self.content.voiceover.as_deref(),
            cfg.fps,
            frame,
            duration,
            &cfg.motion.audio,
        );

        Ok(FrameDescriptor {
            frame,
            progress: chrome.progress,
            background,
            elements,
            chrome,
            audio,
        })
    }
}

/// One-shot frame render: resolve brand and content, segment, and evaluate `frame`.
///
/// Prefer [`Composer`] when rendering more than one frame of the same composition.
pub fn render(
    registry: &BrandRegistry,
    config: &ReelConfig,
    brand_id: &str,
    frame: FrameIndex,
    over: Option<&ContentOverride>,
) -> ReelResult<FrameDescriptor> {
    Composer::new(registry, brand_id, config, over)?.render(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/assembler.rs"]
mod tests;
