use rayon::prelude::*;

use crate::{
    composition::assembler::{Composer, FrameDescriptor},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::fingerprint::{FrameFingerprint, RangeDigest, fingerprint_frame},
    render::sink::{FrameSink, SinkConfig},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub chunks: u64,
    /// Order-sensitive digest of every rendered frame's fingerprint.
    pub digest: FrameFingerprint,
}

/// The whole composition as a frame range.
pub fn full_range(composer: &Composer) -> FrameRange {
    FrameRange {
        start: FrameIndex(0),
        end: FrameIndex(composer.duration()),
    }
}

/// Render a range of frames (inclusive start, exclusive end), in frame order.
pub fn render_frames(
    composer: &Composer,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<FrameDescriptor>> {
    render_frames_with_stats(composer, range, threading).map(|(frames, _)| frames)
}

pub fn render_frames_with_stats(
    composer: &Composer,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<(Vec<FrameDescriptor>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = drive(composer, range, threading, |frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Stream a range into `sink`, calling `begin`, then `push_frame` per frame in order, then `end`.
#[tracing::instrument(skip(composer, sink), fields(brand = %composer.brand().id))]
pub fn render_range_to_sink(
    composer: &Composer,
    range: FrameRange,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> ReelResult<RenderStats> {
    let cfg = composer.config();
    sink.begin(SinkConfig {
        brand_id: composer.brand().id.clone(),
        canvas: cfg.canvas,
        fps: cfg.fps,
        duration_frames: composer.duration(),
    })?;
    let stats = drive(composer, range, threading, |frame| sink.push_frame(&frame))?;
    sink.end()?;
    tracing::info!(
        frames = stats.frames_total,
        chunks = stats.chunks,
        digest = %stats.digest,
        "rendered range"
    );
    Ok(stats)
}

fn check_range(composer: &Composer, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::evaluation("render range must be non-empty"));
    }
    if range.end.0 > composer.duration() {
        return Err(ReelError::evaluation(format!(
            "render range end {} exceeds composition duration {}",
            range.end.0,
            composer.duration()
        )));
    }
    Ok(())
}

/// Render `range` chunk by chunk, handing each frame to `emit` in order.
fn drive(
    composer: &Composer,
    range: FrameRange,
    threading: &RenderThreading,
    mut emit: impl FnMut(FrameDescriptor) -> ReelResult<()>,
) -> ReelResult<RenderStats> {
    check_range(composer, range)?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut digest = RangeDigest::new();
    let mut chunks = 0u64;
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?;

        let frames = match &pool {
            Some(pool) => render_chunk_parallel(composer, chunk, pool)?,
            None => render_chunk_sequential(composer, chunk)?,
        };
        for (frame, fp) in frames {
            digest.push(fp);
            emit(frame)?;
        }

        chunks += 1;
        chunk_start = chunk_end;
    }

    tracing::debug!(frames = digest.frames(), chunks, "render loop finished");
    Ok(RenderStats {
        frames_total: digest.frames(),
        chunks,
        digest: digest.finish(),
    })
}

fn render_one(composer: &Composer, f: u64) -> ReelResult<(FrameDescriptor, FrameFingerprint)> {
    let frame = composer.render(FrameIndex(f))?;
    let fp = fingerprint_frame(&frame)?;
    Ok((frame, fp))
}

fn render_chunk_sequential(
    composer: &Composer,
    range: FrameRange,
) -> ReelResult<Vec<(FrameDescriptor, FrameFingerprint)>> {
    (range.start.0..range.end.0)
        .map(|f| render_one(composer, f))
        .collect()
}

fn render_chunk_parallel(
    composer: &Composer,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> ReelResult<Vec<(FrameDescriptor, FrameFingerprint)>> {
    let start = range.start.0;
    // usize ranges are indexed, so collect keeps frame order.
    pool.install(|| {
        (0..range.len_frames() as usize)
            .into_par_iter()
            .map(|i| render_one(composer, start + i as u64))
            .collect::<ReelResult<Vec<_>>>()
    })
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::configuration(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
