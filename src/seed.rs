use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};

/// Deterministic random source derived from arbitrary seed bytes.
///
/// The SHA-256 digest of `seed` becomes the 32-byte `StdRng` seed, so equal
/// seeds yield the same sequence of IDs. Meant for fixtures and tests; the
/// output is predictable to anyone who knows the seed.
///
/// # Examples
///
/// ```
/// use nanoid_lite::{IdGenerator, seeded_rng};
///
/// let generator = IdGenerator::default();
/// let a = generator.generate_with(&mut seeded_rng("fixture"));
/// let b = generator.generate_with(&mut seeded_rng("fixture"));
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded_rng(seed: impl AsRef<[u8]>) -> StdRng {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&Sha256::digest(seed.as_ref()));
    StdRng::from_seed(digest)
}
