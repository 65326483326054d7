//! brandreel turns a brand profile and a short piece of marketing copy into a 15-second
//! vertical video, described frame by frame.
//!
//! Every frame is a pure function of the frame index: the timeline is segmented once, then
//! [`Composer::render`] evaluates text entrances, word reveals, the background slideshow, chrome,
//! and the voiceover envelope into a serialisable [`FrameDescriptor`]. Rasterising descriptors
//! into pixels is left to the consumer.
//!
//! - Pick a brand from a [`BrandRegistry`] and optionally override its content
//! - Build a [`Composer`] with a [`ReelConfig`]
//! - Render single frames or stream a range into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod assets;
pub(crate) mod audio;
pub(crate) mod background;
pub(crate) mod brand;
pub(crate) mod composition;
pub(crate) mod content;
pub(crate) mod render;
pub(crate) mod timeline;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Transform2D, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::animator::{
    AnimCtx, BadgeMotion, CtaMotion, Decoration, ElementState, Ramp, RevealTiming, TextMotion,
    TextProfile, WordState, animate_segment,
};
pub use crate::animation::ease::{Ease, Spring};
pub use crate::animation::entrance::{Entrance, EntranceMotion};
pub use crate::animation::proc::Wave;
pub use crate::animation::reveal::{RevealWindow, WordPhase, split_words};
pub use crate::assets::store::{PreparedAssets, PreparedSource};
pub use crate::audio::envelope::{AudioCue, AudioMotion, voiceover_volume};
pub use crate::background::slideshow::{
    BackgroundState, ImageRun, KenBurns, Slideshow, SlideshowMotion, scheduled_slot,
};
pub use crate::brand::color::Rgba8;
pub use crate::brand::registry::{
    BrandContent, BrandProfile, BrandRegistry, BrandTheme, MAX_IMAGES,
};
pub use crate::composition::assembler::{Composer, FrameDescriptor, render};
pub use crate::composition::chrome::{AccentShape, ChromeState, ShapeState};
pub use crate::composition::config::{MotionProfile, ReelConfig, SegmentTiming};
pub use crate::content::record::{ContentOverride, ResolvedContent, resolve_content};
pub use crate::content::script::{pin_description, voiceover_script};
pub use crate::render::fingerprint::{FrameFingerprint, RangeDigest, fingerprint_frame};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, full_range, render_frames, render_frames_with_stats,
    render_range_to_sink,
};
pub use crate::render::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use crate::timeline::segment::{SegmentKind, TimelineSegment};
pub use crate::timeline::segmenter::{Timeline, TimelineSpec, segment};
