//! Short, URL-safe random identifiers over a fixed 64-character alphabet.
//!
//! IDs are not cryptographically secure and collisions are possible (about
//! 64^-size per pair), so don't use them as secrets.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod generate;
pub mod id;
pub mod parse;
pub mod seed;
mod serde_impl;

pub use alphabet::{ALPHABET, ALPHABET_LEN, is_alphabet_char};
pub use config::IdConfig;
pub use error::{NanoIdError, Result};
pub use generate::{IdGenerator, collision_probability};
pub use id::NanoId;
pub use parse::{is_valid_id_format, parse_id};
pub use seed::seeded_rng;

/// Generate a random ID of `size` characters.
#[must_use]
pub fn nanoid(size: usize) -> NanoId {
    NanoId::with_size(size)
}
