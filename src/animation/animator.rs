use crate::{
    animation::entrance::{Entrance, EntranceMotion},
    animation::proc::Wave,
    animation::reveal::{RevealWindow, WordPhase, split_words},
    brand::color::Rgba8,
    brand::registry::BrandTheme,
    foundation::core::{Fps, FrameIndex, Vec2},
    foundation::error::{ReelError, ReelResult},
    foundation::math::{lerp, ramp01},
    timeline::segment::{SegmentKind, TimelineSegment},
};

/// Word-by-word reveal timing, in seconds from segment start.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTiming {
    pub delay_secs: f64,
    pub span_secs: f64,
}

impl RevealTiming {
    pub fn window(self, fps: Fps) -> ReelResult<RevealWindow> {
        RevealWindow::new(fps.secs_to_frames(self.delay_secs), fps.secs_to_frames(self.span_secs))
    }
}

/// Motion of one text segment type.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextMotion {
    pub entrance: EntranceMotion,
    /// `None` renders the text as a single static block.
    #[serde(default)]
    pub reveal: Option<RevealTiming>,
    /// Scale of the active word.
    pub word_pulse: Wave,
}

/// Linear ramp of a scalar over the first `secs` of a segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    pub from: f64,
    pub to: f64,
    pub secs: f64,
}

impl Ramp {
    pub fn sample(self, fps: Fps, local: f64) -> f64 {
        lerp(self.from, self.to, ramp01(local / fps.as_f64(), self.secs))
    }
}

/// Numbered badge next to each point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BadgeMotion {
    pub entrance: EntranceMotion,
    /// Frames the badge lags behind the point card.
    pub delay_frames: u64,
    /// Cycled by point index.
    pub colors: Vec<Rgba8>,
}

/// Pulsing call-to-action button with a bouncing arrow below it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CtaMotion {
    pub button_scale: Wave,
    pub glow_px: Wave,
    pub arrow_offset_y: Wave,
    pub arrow_opacity: Wave,
}

/// Complete parameter table for text segments.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextProfile {
    pub hook: TextMotion,
    pub title: TextMotion,
    /// Odd-indexed points mirror `from_offset.x` so cards alternate sides.
    pub point: TextMotion,
    pub cta: TextMotion,
    pub hook_blur_px: Ramp,
    pub title_bar_width_px: Ramp,
    pub badge: BadgeMotion,
    pub cta_button: CtaMotion,
}

impl Default for TextProfile {
    fn default() -> Self {
        let karaoke = Wave::sine(1.0, 0.04, 0.7);
        Self {
            hook: TextMotion {
                entrance: EntranceMotion::spring(100.0, 0.8, 0.6)
                    .with_scale(0.6)
                    .with_fade(0.25),
                reveal: Some(RevealTiming {
                    delay_secs: 0.25,
                    span_secs: 2.3,
                }),
                word_pulse: karaoke,
            },
            title: TextMotion {
                entrance: EntranceMotion::spring(140.0, 1.0, 0.5)
                    .with_scale(0.85)
                    .with_offset(0.0, 40.0)
                    .with_fade(0.2),
                reveal: Some(RevealTiming {
                    delay_secs: 0.25,
                    span_secs: 1.8,
                }),
                word_pulse: karaoke,
            },
            point: TextMotion {
                entrance: EntranceMotion::spring(115.0, 1.0, 0.5).with_offset(-90.0, 0.0),
                reveal: Some(RevealTiming {
                    delay_secs: 0.35,
                    span_secs: 1.4,
                }),
                word_pulse: Wave::constant(1.04),
            },
            cta: TextMotion {
                entrance: EntranceMotion::spring(95.0, 1.0, 0.6).with_scale(0.55),
                reveal: None,
                word_pulse: Wave::constant(1.0),
            },
            hook_blur_px: Ramp {
                from: 8.0,
                to: 0.0,
                secs: 0.25,
            },
            title_bar_width_px: Ramp {
                from: 0.0,
                to: 110.0,
                secs: 0.25,
            },
            badge: BadgeMotion {
                entrance: EntranceMotion::spring(180.0, 1.0, 0.4),
                delay_frames: 4,
                colors: vec![
                    Rgba8::rgb(0xff, 0x6b, 0x6b),
                    Rgba8::rgb(0x4e, 0xcd, 0xc4),
                    Rgba8::rgb(0x45, 0xb7, 0xd1),
                ],
            },
            cta_button: CtaMotion {
                button_scale: Wave::sine(1.0, 0.025, 0.55),
                glow_px: Wave::sine(18.0, 12.0, 0.55),
                arrow_offset_y: Wave::triangle(0.0, -12.0, 1.0),
                arrow_opacity: Wave::triangle(0.6, 1.0, 1.0),
            },
        }
    }
}

impl TextProfile {
    pub fn validate(&self) -> ReelResult<()> {
        for (name, m) in [
            ("hook", &self.hook),
            ("title", &self.title),
            ("point", &self.point),
            ("cta", &self.cta),
        ] {
            m.entrance
                .validate()
                .and_then(|_| m.word_pulse.validate())
                .map_err(|e| ReelError::configuration(format!("{name} motion: {e}")))?;
            if let Some(r) = m.reveal {
                RevealWindow::new(r.delay_secs, r.span_secs)
                    .map_err(|e| ReelError::configuration(format!("{name} reveal: {e}")))?;
            }
        }
        for ramp in [self.hook_blur_px, self.title_bar_width_px] {
            if !ramp.secs.is_finite() || ramp.secs < 0.0 {
                return Err(ReelError::configuration("ramp secs must be >= 0"));
            }
        }
        self.badge.entrance.validate()?;
        if self.badge.colors.is_empty() {
            return Err(ReelError::configuration("badge colors must be non-empty"));
        }
        for w in [
            self.cta_button.button_scale,
            self.cta_button.glow_px,
            self.cta_button.arrow_offset_y,
            self.cta_button.arrow_opacity,
        ] {
            w.validate()?;
        }
        Ok(())
    }

    pub fn motion(&self, kind: SegmentKind) -> &TextMotion {
        match kind {
            SegmentKind::Hook => &self.hook,
            SegmentKind::Title => &self.title,
            SegmentKind::Point(_) => &self.point,
            SegmentKind::CallToAction => &self.cta,
        }
    }

    pub fn badge_color(&self, index: usize) -> Rgba8 {
        self.badge
            .colors
            .get(index % self.badge.colors.len().max(1))
            .copied()
            .unwrap_or(Rgba8::WHITE)
    }
}

/// Render parameters of one word.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WordState {
    pub text: String,
    pub phase: WordPhase,
    pub scale: f64,
    pub color: Rgba8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Rgba8>,
}

/// Segment-specific extras drawn around the text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Decoration {
    Hook {
        blur_px: f64,
    },
    Title {
        accent_bar_width_px: f64,
        card_from: Rgba8,
        card_to: Rgba8,
    },
    Point {
        number: usize,
        badge_color: Rgba8,
        badge_scale: f64,
    },
    CallToAction {
        button_scale: f64,
        glow_px: f64,
        glow_color: Rgba8,
        arrow_offset_y: f64,
        arrow_opacity: f64,
    },
}

/// Animated state of one active text segment at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    pub kind: SegmentKind,
    pub text: String,
    pub local_frame: u64,
    pub opacity: f64,
    pub scale: f64,
    pub offset: Vec2,
    pub words: Vec<WordState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_word: Option<usize>,
    pub decoration: Decoration,
}

/// Inputs shared by every element at one frame.
#[derive(Clone, Copy, Debug)]
pub struct AnimCtx<'a> {
    pub fps: Fps,
    pub frame: FrameIndex,
    pub theme: &'a BrandTheme,
    pub profile: &'a TextProfile,
}

struct WordPalette {
    active: Option<Rgba8>,
    spoken: Option<Rgba8>,
    active_text: Rgba8,
    spoken_text: Rgba8,
    muted_text: Rgba8,
}

fn palette(kind: SegmentKind, theme: &BrandTheme, badge: Rgba8) -> WordPalette {
    match kind {
        SegmentKind::Hook => WordPalette {
            active: Some(theme.accent),
            spoken: Some(theme.primary.with_alpha(0x70)),
            active_text: Rgba8::WHITE,
            spoken_text: Rgba8::WHITE,
            muted_text: Rgba8::WHITE.with_opacity(0.6),
        },
        SegmentKind::Title => WordPalette {
            active: Some(Rgba8::WHITE.with_opacity(0.28)),
            spoken: None,
            active_text: Rgba8::WHITE,
            spoken_text: Rgba8::WHITE,
            muted_text: Rgba8::WHITE.with_opacity(0.7),
        },
        SegmentKind::Point(_) => WordPalette {
            active: Some(badge),
            spoken: Some(badge.with_alpha(0x35)),
            active_text: Rgba8::WHITE,
            spoken_text: Rgba8::rgb(0x1a, 0x1a, 0x1a),
            muted_text: Rgba8::rgb(0x1a, 0x1a, 0x1a),
        },
        SegmentKind::CallToAction => WordPalette {
            active: None,
            spoken: None,
            active_text: Rgba8::WHITE,
            spoken_text: Rgba8::WHITE,
            muted_text: Rgba8::WHITE,
        },
    }
}

/// Evaluate `segment` carrying `text` at `ctx.frame`.
///
/// Pure: the result depends only on the arguments, so frames may be evaluated in any order
/// and any number of times.
pub fn animate_segment(
    ctx: &AnimCtx<'_>,
    segment: &TimelineSegment,
    text: &str,
) -> ReelResult<ElementState> {
    let kind = segment.kind;
    let motion = ctx.profile.motion(kind);
    let local_frame = segment.local(ctx.frame);
    let local = local_frame as f64;

    let mut entrance = motion.entrance;
    if let SegmentKind::Point(i) = kind
        && i % 2 == 1
    {
        entrance.from_offset.x = -entrance.from_offset.x;
    }
    let Entrance {
        opacity,
        scale,
        offset,
        ..
    } = entrance.sample(ctx.fps, local);

    let badge_color = match kind {
        SegmentKind::Point(i) => ctx.profile.badge_color(i),
        _ => Rgba8::WHITE,
    };

    let (words, active_word) = match motion.reveal {
        Some(timing) => {
            let window = timing.window(ctx.fps)?;
            let split = split_words(text);
            let active = window.active_index(local, split.len());
            let colors = palette(kind, ctx.theme, badge_color);
            let pulse = motion.word_pulse.sample(ctx.fps, ctx.frame);
            let words = split
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    // `active` is `Some` whenever `split` is non-empty.
                    let phase = WordPhase::classify(i, active.unwrap_or(0));
                    let (color, highlight, scale) = match phase {
                        WordPhase::Active => (colors.active_text, colors.active, pulse),
                        WordPhase::Spoken => (colors.spoken_text, colors.spoken, 1.0),
                        WordPhase::Muted => (colors.muted_text, None, 1.0),
                    };
                    WordState {
                        text: (*w).to_owned(),
                        phase,
                        scale,
                        color,
                        highlight,
                    }
                })
                .collect();
            (words, active)
        }
        None => (Vec::new(), None),
    };

    let decoration = match kind {
        SegmentKind::Hook => Decoration::Hook {
            blur_px: ctx.profile.hook_blur_px.sample(ctx.fps, local),
        },
        SegmentKind::Title => Decoration::Title {
            accent_bar_width_px: ctx.profile.title_bar_width_px.sample(ctx.fps, local),
            card_from: ctx.theme.primary,
            card_to: ctx.theme.secondary,
        },
        SegmentKind::Point(i) => {
            let badge = &ctx.profile.badge;
            let lagged = (local - badge.delay_frames as f64).max(0.0);
            let badge_scale = badge.entrance.progress(ctx.fps, lagged);
            Decoration::Point {
                number: i + 1,
                badge_color,
                badge_scale,
            }
        }
        SegmentKind::CallToAction => {
            let cta = &ctx.profile.cta_button;
            Decoration::CallToAction {
                button_scale: cta.button_scale.sample(ctx.fps, ctx.frame),
                glow_px: cta.glow_px.sample(ctx.fps, ctx.frame),
                glow_color: ctx.theme.accent.with_alpha(0x75),
                arrow_offset_y: cta.arrow_offset_y.sample(ctx.fps, ctx.frame),
                arrow_opacity: cta.arrow_opacity.sample(ctx.fps, ctx.frame),
            }
        }
    };

    Ok(ElementState {
        kind,
        text: text.to_owned(),
        local_frame,
        opacity,
        scale,
        offset,
        words,
        active_word,
        decoration,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
