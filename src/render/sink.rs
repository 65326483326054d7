use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    composition::assembler::FrameDescriptor,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub brand_id: String,
    pub canvas: Canvas,
    pub fps: Fps,
    /// Composition length in frames, not the length of the rendered range.
    pub duration_frames: u64,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing frame order within the requested range.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    fn push_frame(&mut self, frame: &FrameDescriptor) -> ReelResult<()>;
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameDescriptor>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[FrameDescriptor] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn into_frames(self) -> Vec<FrameDescriptor> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameDescriptor) -> ReelResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes one compact JSON descriptor per line.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    written: u64,
}

impl JsonLinesSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            ReelError::configuration(format!("create output '{}': {e}", path.display()))
        })?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        tracing::debug!(brand = %cfg.brand_id, duration = cfg.duration_frames, "json lines sink begin");
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameDescriptor) -> ReelResult<()> {
        serde_json::to_writer(&mut self.out, frame)
            .map_err(|e| ReelError::serde(format!("write frame {}: {e}", frame.frame.0)))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| ReelError::Other(e.into()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.out.flush().map_err(|e| ReelError::Other(e.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
