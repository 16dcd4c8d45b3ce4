//! @acp:module "Seeded Stream"
//! @acp:summary "Stable seeds and repeatable pseudo-random draws from semantic inputs"
//! @acp:domain generation
//! @acp:layer utility
//!
//! The seed is the first 16 hex digits of SHA-256 over the `|`-joined parts.
//! Every draw advances one shared stream, so the order of draws on a code path
//! is part of the output contract: reordering them changes every document.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Separator placed between seed parts
pub const SEED_SEPARATOR: &str = "|";

/// Number of hex digits of the digest used for the seed
const SEED_HEX_DIGITS: usize = 16;

/// Derive a stable seed from ordered semantic parts
pub fn derive_seed(parts: &[&str]) -> u64 {
    let joined = parts.join(SEED_SEPARATOR);
    let digest = Sha256::digest(joined.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    // 16 hex digits always fit in a u64
    u64::from_str_radix(&hex[..SEED_HEX_DIGITS], 16).unwrap_or_default()
}

/// Repeatable pseudo-random stream for a single assemble call
pub struct SeededStream {
    seed: u64,
    rng: StdRng,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed the stream from semantic parts
    pub fn from_parts(parts: &[&str]) -> Self {
        Self::new(derive_seed(parts))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Low bit of the seed, used for 0/1 structural variations
    pub fn seed_bit(&self) -> usize {
        (self.seed % 2) as usize
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Inclusive integer draw
    pub fn randint(&mut self, low: usize, high: usize) -> usize {
        self.rng.random_range(low..=high)
    }

    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
