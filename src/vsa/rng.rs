//! Deterministic xorshift generator for hypervector construction.
//!
//! The stream is fully determined by its seed; seed `0` asks for a fresh seed
//! from the thread-local entropy source instead. State lives in the caller's
//! `TritRng` value, never in a global.

use super::ternary::Trit;
use rand::{Rng, RngCore};

/// Seedable xorshift64 stream (`x ^= x << 13; x ^= x >> 7; x ^= x << 17`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TritRng {
    state: u64,
}

impl TritRng {
    /// Create a generator. A zero seed is replaced by a non-zero entropy draw.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { entropy_seed() } else { seed };
        Self { state }
    }

    /// Current internal state; feeding it back to [`TritRng::new`] resumes the stream.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the recurrence and return the new state.
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Draw one trit as `word % 3 - 1`.
    #[inline]
    pub fn next_trit(&mut self) -> Trit {
        Trit::from_draw(self.next_word())
    }
}

impl RngCore for TritRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_word() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Non-zero seed from the thread-local entropy source (xorshift is stuck at 0).
fn entropy_seed() -> u64 {
    let seed = rand::thread_rng().gen_range(1..=u64::MAX);
    #[cfg(feature = "logging")]
    tracing::trace!(seed, "drew generator seed from entropy");
    seed
}
