use crate::foundation::error::{ReelError, ReelResult};

/// Easing curve applied to a normalised `[0, 1]` progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
    /// Critically damped spring, normalised to land exactly on 1 at the end of the window.
    Spring(Spring),
}

impl Ease {
    /// Map `t` in `[0, 1]` (clamped) through the curve. `window_secs` is the wall-clock length
    /// of the window, which only the spring needs.
    pub fn apply(self, t: f64, window_secs: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::Spring(s) => s.normalized(t * window_secs, window_secs),
        }
    }

    pub fn validate(self) -> ReelResult<()> {
        match self {
            Self::Spring(s) => s.validate(),
            _ => Ok(()),
        }
    }
}

/// Critically damped mass-spring response towards 1.
///
/// Without overshoot the response is monotone, which keeps every entrance ramp monotone.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl Spring {
    pub fn new(stiffness: f64, mass: f64) -> Self {
        Self { stiffness, mass }
    }

    pub fn validate(self) -> ReelResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(ReelError::configuration("spring stiffness must be > 0"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ReelError::configuration("spring mass must be > 0"));
        }
        Ok(())
    }

    /// Angular frequency `sqrt(k / m)`.
    pub fn omega(self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Raw response `1 - e^{-wt}(1 + wt)` at `secs`.
    pub fn response(self, secs: f64) -> f64 {
        if secs <= 0.0 {
            return 0.0;
        }
        let wt = self.omega() * secs;
        1.0 - (-wt).exp() * (1.0 + wt)
    }

    /// Response rescaled so that `normalized(window, window) == 1`.
    pub fn normalized(self, secs: f64, window_secs: f64) -> f64 {
        if window_secs <= 0.0 || secs >= window_secs {
            return 1.0;
        }
        let end = self.response(window_secs);
        if end <= 0.0 {
            return 1.0;
        }
        (self.response(secs) / end).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
