use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::animator::TextProfile,
    audio::envelope::AudioMotion,
    background::slideshow::SlideshowMotion,
    composition::chrome::AccentShape,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    timeline::segmenter::TimelineSpec,
};

/// Fixed segment lengths in seconds. The CTA absorbs whatever is left of the duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SegmentTiming {
    pub hook_secs: f64,
    pub title_secs: f64,
    pub point_secs: f64,
}

impl Default for SegmentTiming {
    fn default() -> Self {
        Self {
            hook_secs: 3.0,
            title_secs: 2.5,
            point_secs: 2.0,
        }
    }
}

/// Every tunable motion constant, grouped by the component that consumes it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    pub text: TextProfile,
    pub background: SlideshowMotion,
    pub audio: AudioMotion,
    pub shapes: Vec<AccentShape>,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            text: TextProfile::default(),
            background: SlideshowMotion::default(),
            audio: AudioMotion::default(),
            shapes: AccentShape::defaults(),
        }
    }
}

/// Composition-wide render configuration.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    pub fps: Fps,
    pub canvas: Canvas,
    pub duration_secs: f64,
    pub timing: SegmentTiming,
    pub motion: MotionProfile,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            duration_secs: 15.0,
            timing: SegmentTiming::default(),
            motion: MotionProfile::default(),
        }
    }
}

fn check_secs(name: &str, v: f64) -> ReelResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ReelError::configuration(format!("{name} must be finite and > 0")));
    }
    Ok(())
}

impl ReelConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::configuration(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::configuration("fps num and den must be > 0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::configuration("canvas width and height must be > 0"));
        }
        check_secs("duration_secs", self.duration_secs)?;
        check_secs("timing.hook_secs", self.timing.hook_secs)?;
        check_secs("timing.title_secs", self.timing.title_secs)?;
        check_secs("timing.point_secs", self.timing.point_secs)?;
        self.motion.text.validate()?;
        self.motion.background.validate()?;
        self.motion.audio.validate()?;
        for shape in &self.motion.shapes {
            shape.validate()?;
        }
        Ok(())
    }

    pub fn duration_frames(&self) -> u64 {
        self.fps.secs_to_frames_round(self.duration_secs)
    }

    /// Frame lengths for a composition carrying `point_count` points.
    pub fn timeline_spec(&self, point_count: usize) -> TimelineSpec {
        TimelineSpec {
            hook_frames: self.fps.secs_to_frames_round(self.timing.hook_secs),
            title_frames: self.fps.secs_to_frames_round(self.timing.title_secs),
            point_frames: self.fps.secs_to_frames_round(self.timing.point_secs),
            point_count,
            total_frames: self.duration_frames(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
