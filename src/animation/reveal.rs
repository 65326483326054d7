use crate::foundation::error::{ReelError, ReelResult};

/// Frame window over which words of a text element are revealed one by one.
///
/// Both values are segment-local frames and may be fractional (e.g. 0.25 s at 30 fps).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealWindow {
    pub delay: f64,
    pub span: f64,
}

impl RevealWindow {
    pub fn new(delay: f64, span: f64) -> ReelResult<Self> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(ReelError::configuration("reveal delay must be >= 0"));
        }
        if !span.is_finite() || span <= 0.0 {
            return Err(ReelError::configuration("reveal span must be > 0"));
        }
        Ok(Self { delay, span })
    }

    pub fn end(self) -> f64 {
        self.delay + self.span
    }

    /// Index of the word being spoken at segment-local time `t`.
    ///
    /// Returns `None` for `word_count == 0`. Before `delay` the first word is active; the index
    /// never decreases as `t` grows and settles on the last word once `t >= end()`.
    pub fn active_index(self, t: f64, word_count: usize) -> Option<usize> {
        if word_count == 0 {
            return None;
        }
        let w = word_count as f64;
        // Multiply before dividing so whole-word boundaries land on exact integers.
        let raw = (w * (t - self.delay) / self.span).clamp(0.0, w).floor();
        Some((raw as usize).min(word_count - 1))
    }
}

/// Presentation state of one word relative to the active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPhase {
    /// Already read; dimmed highlight.
    Spoken,
    /// Currently read; full highlight and pulse.
    Active,
    /// Not reached yet.
    Muted,
}

impl WordPhase {
    pub fn classify(index: usize, active: usize) -> Self {
        match index.cmp(&active) {
            std::cmp::Ordering::Less => Self::Spoken,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Muted,
        }
    }
}

/// Whitespace word split shared by every text element.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
