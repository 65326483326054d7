use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{ReelError, ReelResult},
    foundation::math::interpolate,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AudioMotion {
    /// Fade in from the composition start and out to its end.
    pub fade_secs: f64,
}

impl Default for AudioMotion {
    fn default() -> Self {
        Self { fade_secs: 0.3 }
    }
}

impl AudioMotion {
    pub fn validate(&self) -> ReelResult<()> {
        if !self.fade_secs.is_finite() || self.fade_secs < 0.0 {
            return Err(ReelError::configuration("audio fade_secs must be >= 0"));
        }
        Ok(())
    }
}

/// Voiceover track and its volume at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioCue {
    pub source: String,
    pub volume: f64,
}

/// Volume in `[0, 1]` for a track spanning the whole composition of `duration` frames.
///
/// When the two fades would overlap (very short compositions) they meet in the middle.
pub fn voiceover_volume(fps: Fps, frame: FrameIndex, duration: u64, motion: &AudioMotion) -> f64 {
    let d = duration as f64;
    let fade = fps.secs_to_frames(motion.fade_secs).min(d / 2.0);
    if fade <= 0.0 {
        return if frame.0 < duration { 1.0 } else { 0.0 };
    }
    interpolate(frame.0 as f64, &[0.0, fade, d - fade, d], &[0.0, 1.0, 1.0, 0.0])
}

pub fn voiceover_cue(
    source: Option<&str>,
    fps: Fps,
    frame: FrameIndex,
    duration: u64,
    motion: &AudioMotion,
) -> Option<AudioCue> {
    source.map(|s| AudioCue {
        source: s.to_owned(),
        volume: voiceover_volume(fps, frame, duration, motion),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/envelope.rs"]
mod tests;
