use crate::alphabet::{ALPHABET_LEN, char_at};
use crate::config::IdConfig;
use crate::id::NanoId;
use rand::Rng;

/// Approximate probability that `item_count` random IDs of `size` characters contain a collision.
///
/// Uses the birthday bound P = 1 - e^(-n^2 / 2d), where d = 64^size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn collision_probability(size: usize, item_count: usize) -> f64 {
    let n = item_count as f64;
    let d = (ALPHABET_LEN as f64).powi(i32::try_from(size).unwrap_or(i32::MAX));
    let exponent = -(n * n) / (2.0 * d);
    // 1 - e^x, without losing precision when x is tiny
    -exponent.exp_m1()
}

/// Random ID generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    config: IdConfig,
}

impl IdGenerator {
    /// Create a new ID generator with the given config.
    #[must_use]
    pub const fn new(config: IdConfig) -> Self {
        Self { config }
    }

    /// Generator producing IDs of `size` characters with otherwise default settings.
    #[must_use]
    pub const fn with_size(size: usize) -> Self {
        Self::new(IdConfig::new().size(size))
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.config.size
    }

    /// Generate an ID from the thread-local random source.
    #[must_use]
    pub fn generate(&self) -> NanoId {
        self.generate_with(&mut rand::rng())
    }

    /// Generate an ID from a caller-supplied random source.
    ///
    /// Each character is drawn independently and uniformly from the 64-character alphabet.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> NanoId {
        let value: String = (0..self.config.size)
            .map(|_| char_at(rng.random_range(0..ALPHABET_LEN)))
            .collect();
        log::trace!("generated ID of size {}", self.config.size);
        NanoId::from_valid(value)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdConfig::default())
    }
}
