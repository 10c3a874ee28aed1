//! Seeded index derivation
//!
//! A seed key is hashed with 32-bit FNV-1a over its UTF-16 code units, the
//! hash seeds a Mulberry32 generator, and the first `[0, 1)` sample is
//! scaled onto the population. All arithmetic is wrapping 32-bit, so the
//! same key picks the same index on every platform.

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of the key's UTF-16 code units
#[must_use]
pub fn fnv1a_32(key: &str) -> u32 {
    key.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32, a single-word generator
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform sample in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Deterministic index in `[0, population_size)` for `seed_key`.
///
/// Callers only ask for non-empty populations; a zero size yields 0.
#[must_use]
pub fn derive_index(seed_key: &str, population_size: usize) -> usize {
    debug_assert!(population_size > 0, "derive_index on an empty population");
    if population_size == 0 {
        return 0;
    }
    let mut rng = Mulberry32::new(fnv1a_32(seed_key));
    let index = (rng.next_f64() * population_size as f64).floor() as usize;
    index.min(population_size - 1)
}
