use xxhash_rust::xxh3::Xxh3;

use crate::{
    composition::assembler::FrameDescriptor,
    foundation::error::{ReelError, ReelResult},
};

const XXH3_SEED: u64 = 0x6272_616e_6472_6565;

/// Stable 128-bit hash of a serialised frame descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl FrameFingerprint {
    pub fn to_hex(self) -> String {
        format!("{:016x}{:016x}", self.hi, self.lo)
    }

    fn from_digest(v: u128) -> Self {
        Self {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hash the canonical JSON form of `frame`.
///
/// Two descriptors share a fingerprint exactly when they serialise to the same bytes.
pub fn fingerprint_frame(frame: &FrameDescriptor) -> ReelResult<FrameFingerprint> {
    let bytes = serde_json::to_vec(frame)
        .map_err(|e| ReelError::serde(format!("serialize frame {}: {e}", frame.frame.0)))?;
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&bytes);
    Ok(FrameFingerprint::from_digest(h.digest128()))
}

/// Order-sensitive digest over a sequence of frame fingerprints.
pub struct RangeDigest {
    inner: Xxh3,
    frames: u64,
}

impl Default for RangeDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeDigest {
    pub fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
            frames: 0,
        }
    }

    pub fn push(&mut self, fp: FrameFingerprint) {
        self.inner.update(&fp.hi.to_le_bytes());
        self.inner.update(&fp.lo.to_le_bytes());
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn finish(&self) -> FrameFingerprint {
        FrameFingerprint::from_digest(self.inner.digest128())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
