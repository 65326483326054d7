use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{ReelError, ReelResult},
    foundation::math::interpolate,
};

/// Periodic signal keyed off the absolute composition frame.
///
/// Sampling never depends on anything but `(fps, frame)`, so any frame can be evaluated in any
/// order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Wave {
    /// `base + amplitude * sin(2π * t / period)`.
    Sine {
        base: f64,
        amplitude: f64,
        period_secs: f64,
    },
    /// Linear `from -> peak -> from` once per period.
    Triangle {
        from: f64,
        peak: f64,
        period_secs: f64,
    },
}

impl Wave {
    pub fn sine(base: f64, amplitude: f64, period_secs: f64) -> Self {
        Self::Sine {
            base,
            amplitude,
            period_secs,
        }
    }

    pub fn triangle(from: f64, peak: f64, period_secs: f64) -> Self {
        Self::Triangle {
            from,
            peak,
            period_secs,
        }
    }

    /// A wave that never moves off `value`.
    pub fn constant(value: f64) -> Self {
        Self::sine(value, 0.0, 1.0)
    }

    pub fn validate(self) -> ReelResult<()> {
        let period = match self {
            Self::Sine { period_secs, .. } | Self::Triangle { period_secs, .. } => period_secs,
        };
        if !period.is_finite() || period <= 0.0 {
            return Err(ReelError::configuration("wave period_secs must be > 0"));
        }
        Ok(())
    }

    pub fn sample(self, fps: Fps, frame: FrameIndex) -> f64 {
        let f = frame.0 as f64;
        match self {
            Self::Sine {
                base,
                amplitude,
                period_secs,
            } => {
                let period = fps.secs_to_frames(period_secs);
                if period <= 0.0 || amplitude == 0.0 {
                    return base;
                }
                base + amplitude * (std::f64::consts::TAU * f / period).sin()
            }
            Self::Triangle {
                from,
                peak,
                period_secs,
            } => {
                let period = fps.secs_to_frames(period_secs);
                if period <= 0.0 {
                    return from;
                }
                let phase = f.rem_euclid(period) / period;
                interpolate(phase, &[0.0, 0.5, 1.0], &[from, peak, from])
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
