use crate::{
    animation::ease::{Ease, Spring},
    foundation::core::{Fps, Vec2},
    foundation::error::{ReelError, ReelResult},
    foundation::math::{lerp, ramp01},
};

/// How an element arrives on screen at the start of its segment.
///
/// Everything is driven by one eased progress value over `window_secs`; once the window has
/// elapsed the element is at rest (opacity 1, scale 1, no offset).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceMotion {
    pub ease: Ease,
    pub window_secs: f64,
    /// Starting scale, in `(0, 1]`; scale only ever grows towards 1.
    pub from_scale: f64,
    /// Starting translation in pixels; decays to zero.
    #[serde(default)]
    pub from_offset: Vec2,
    /// Linear opacity fade length. `None` lets opacity follow the eased progress.
    #[serde(default)]
    pub fade_secs: Option<f64>,
}

/// Sampled entrance parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Entrance {
    pub progress: f64,
    pub opacity: f64,
    pub scale: f64,
    pub offset: Vec2,
}

impl EntranceMotion {
    pub fn spring(stiffness: f64, mass: f64, window_secs: f64) -> Self {
        Self {
            ease: Ease::Spring(Spring::new(stiffness, mass)),
            window_secs,
            from_scale: 1.0,
            from_offset: Vec2::ZERO,
            fade_secs: None,
        }
    }

    pub fn with_scale(self, from_scale: f64) -> Self {
        Self { from_scale, ..self }
    }

    pub fn with_offset(self, x: f64, y: f64) -> Self {
        Self {
            from_offset: Vec2::new(x, y),
            ..self
        }
    }

    pub fn with_fade(self, secs: f64) -> Self {
        Self {
            fade_secs: Some(secs),
            ..self
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.ease.validate()?;
        if !self.window_secs.is_finite() || self.window_secs <= 0.0 {
            return Err(ReelError::configuration("entrance window_secs must be > 0"));
        }
        if !(self.from_scale > 0.0 && self.from_scale <= 1.0) {
            return Err(ReelError::configuration(
                "entrance from_scale must be in (0, 1]",
            ));
        }
        if !self.from_offset.is_finite() {
            return Err(ReelError::configuration("entrance from_offset must be finite"));
        }
        if let Some(fade) = self.fade_secs
            && !(fade > 0.0 && fade <= self.window_secs)
        {
            return Err(ReelError::configuration(
                "entrance fade_secs must be in (0, window_secs]",
            ));
        }
        Ok(())
    }

    /// Progress in `[0, 1]` at segment-local frame `local`.
    pub fn progress(&self, fps: Fps, local: f64) -> f64 {
        let secs = local / fps.as_f64();
        if secs >= self.window_secs {
            return 1.0;
        }
        self.ease.apply(secs / self.window_secs, self.window_secs)
    }

    pub fn sample(&self, fps: Fps, local: f64) -> Entrance {
        let progress = self.progress(fps, local);
        let opacity = match self.fade_secs {
            Some(fade) => ramp01(local / fps.as_f64(), fade),
            None => progress,
        };
        Entrance {
            progress,
            opacity,
            scale: lerp(self.from_scale, 1.0, progress),
            offset: self.from_offset * (1.0 - progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
