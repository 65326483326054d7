use crate::{
    brand::color::Rgba8,
    foundation::core::{FrameIndex, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// A soft accent-colored blob drifting behind the text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccentShape {
    pub size_px: f64,
    pub x: f64,
    pub y: f64,
    /// Multiplier on both the drift and breathing frequencies.
    pub speed: f64,
    pub opacity: f64,
}

impl AccentShape {
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(350.0, -80.0, -80.0, 0.3, 0.12),
            Self::new(280.0, 850.0, 1350.0, 0.2, 0.08),
            Self::new(220.0, 750.0, 280.0, 0.35, 0.10),
        ]
    }

    const fn new(size_px: f64, x: f64, y: f64, speed: f64, opacity: f64) -> Self {
        Self {
            size_px,
            x,
            y,
            speed,
            opacity,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if !(self.size_px.is_finite() && self.size_px > 0.0) {
            return Err(ReelError::configuration("accent shape size_px must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ReelError::configuration(
                "accent shape opacity must be in [0, 1]",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, frame: FrameIndex, color: Rgba8) -> ShapeState {
        let f = frame.0 as f64;
        ShapeState {
            size_px: self.size_px,
            position: Vec2::new(self.x, self.y + (f * self.speed * 0.05).sin() * 40.0),
            scale: 1.0 + (f * self.speed * 0.03).sin() * 0.08,
            opacity: self.opacity,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeState {
    pub size_px: f64,
    pub position: Vec2,
    pub scale: f64,
    pub opacity: f64,
    pub color: Rgba8,
}

/// Overlays that do not belong to any segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChromeState {
    /// Fraction of the composition elapsed, in `[0, 1)`.
    pub progress: f64,
    pub progress_color: Rgba8,
    pub shapes: Vec<ShapeState>,
    pub watermark: String,
}

pub fn watermark(display_name: &str) -> String {
    format!("@{display_name}")
}

pub fn progress(frame: FrameIndex, duration: u64) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    frame.0 as f64 / duration as f64
}

pub fn sample_chrome(
    frame: FrameIndex,
    duration: u64,
    shapes: &[AccentShape],
    accent: Rgba8,
    display_name: &str,
) -> ChromeState {
    ChromeState {
        progress: progress(frame, duration),
        progress_color: accent,
        shapes: shapes.iter().map(|s| s.sample(frame, accent)).collect(),
        watermark: watermark(display_name),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/chrome.rs"]
mod tests;
