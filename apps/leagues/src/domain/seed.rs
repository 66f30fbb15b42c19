//! Seed hashing and the seeded PRNG behind reproducible draft orders.
//!
//! Both halves are defined purely over 32-bit integer arithmetic so a league's
//! draft order can be reproduced bit-for-bit from its seed string on any
//! platform:
//!
//! - [`fnv1a_32`] turns the seed string into a 32-bit state.
//! - [`Mulberry32`] expands that state into a uniform `u32` stream.
//! - [`IndexSource::index_below`] draws unbiased indices by rejection sampling.

use rand::Rng;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};
use unicode_normalization::UnicodeNormalization;

pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
pub const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the code points of `seed`.
pub fn fnv1a_32(seed: &str) -> u32 {
    seed.chars().fold(FNV_OFFSET_BASIS, |acc, ch| {
        (acc ^ ch as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32: a small 32-bit generator with a single word of state.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from a string via [`fnv1a_32`].
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(fnv1a_32(seed))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform value in `[0, 1)`. Not used for shuffling.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Source of uniformly distributed indices for shuffling.
pub trait IndexSource {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl IndexSource for Mulberry32 {
    fn index_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0 && bound as u64 <= u64::from(u32::MAX));
        let m = bound as u32;
        // Largest multiple of m that fits in u32; draws at or above it are rejected.
        let limit = u32::MAX - (u32::MAX % m);
        loop {
            let x = self.next_u32();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Non-deterministic source backed by the thread-local OS-seeded RNG.
pub struct EntropySource<R: Rng> {
    rng: R,
}

impl EntropySource<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> EntropySource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for EntropySource<R> {
    fn index_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Fisher-Yates shuffle, walking from the last index down to 1.
pub fn shuffle_with<T, S: IndexSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Conventional seed for a league: `"{league_id}:{created_at}:{contact}"`.
///
/// The timestamp is rendered as RFC 3339 in UTC and the commissioner contact
/// is trimmed, NFKC-normalized and lowercased so cosmetic differences in the
/// contact string do not change the seed.
pub fn derive_league_seed(
    league_id: i64,
    created_at: OffsetDateTime,
    commissioner_contact: &str,
) -> String {
    let utc = created_at.to_offset(UtcOffset::UTC);
    let ts = utc
        .format(&Rfc3339)
        .unwrap_or_else(|_| utc.unix_timestamp().to_string());
    let contact = normalize_contact(commissioner_contact);
    format!("{league_id}:{ts}:{contact}")
}

fn normalize_contact(contact: &str) -> String {
    contact.trim().nfkc().collect::<String>().to_lowercase()
}
