use crate::error::{NanoIdError, Result};
use crate::generate::IdGenerator;
use crate::parse::parse_id;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A short random identifier whose characters all come from [`ALPHABET`](crate::ALPHABET).
///
/// A `NanoId` is either generated or validated from an existing string; there is
/// no way to construct one holding a character outside the alphabet. Equality,
/// ordering and hashing are those of the underlying string.
///
/// Generated values are not cryptographically secure and are not guaranteed to
/// be unique.
///
/// # Examples
///
/// ```
/// use nanoid_lite::NanoId;
///
/// let id = NanoId::generate();
/// assert_eq!(id.size(), NanoId::DEFAULT_SIZE);
///
/// let parsed = NanoId::new("abc").unwrap();
/// assert_eq!(parsed.value(), "abc");
/// assert!(NanoId::new("abc def").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NanoId(String);

impl NanoId {
    /// Length of IDs produced by [`NanoId::generate`].
    pub const DEFAULT_SIZE: usize = 21;

    /// Generates a random ID of [`NanoId::DEFAULT_SIZE`] characters.
    #[must_use]
    pub fn generate() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }

    /// Generates a random ID of exactly `size` characters. A size of 0 yields an empty ID.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        IdGenerator::with_size(size).generate()
    }

    /// Validates `candidate`, returning `None` if any character is outside the alphabet.
    ///
    /// The value is kept exactly as given: no trimming, no case folding.
    #[must_use]
    pub fn new(candidate: impl Into<String>) -> Option<Self> {
        parse_id(candidate).ok()
    }

    /// Wraps a string already known to contain only alphabet characters.
    pub(crate) const fn from_valid(value: String) -> Self {
        Self(value)
    }

    /// The ID as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Number of characters in the ID.
    #[must_use]
    pub const fn size(&self) -> usize {
        // alphabet is ASCII, so bytes == chars
        self.0.len()
    }

    /// Consumes the ID, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NanoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NanoId {
    type Err = NanoIdError;

    fn from_str(s: &str) -> Result<Self> {
        parse_id(s)
    }
}

impl TryFrom<&str> for NanoId {
    type Error = NanoIdError;

    fn try_from(value: &str) -> Result<Self> {
        parse_id(value)
    }
}

impl TryFrom<String> for NanoId {
    type Error = NanoIdError;

    fn try_from(value: String) -> Result<Self> {
        parse_id(value)
    }
}

impl AsRef<str> for NanoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NanoId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<NanoId> for String {
    fn from(id: NanoId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{ALPHABET, is_alphabet_char};
    use std::collections::{HashMap, HashSet};

    // ========== Generation ==========

    #[test]
    fn test_generate_uses_alphabet() {
        let id = NanoId::generate();
        for ch in id.value().chars() {
            assert!(is_alphabet_char(ch), "Invalid character in {}: {}", id, ch);
        }
    }

    #[test]
    fn test_generate_default_size() {
        let id = NanoId::generate();
        assert_eq!(id.size(), 21);
        assert_eq!(id.value().chars().count(), id.size());
    }

    #[test]
    fn test_with_custom_size() {
        let id = NanoId::with_size(4);
        assert_eq!(id.size(), 4);
        assert_eq!(id.value().chars().count(), 4);
    }

    #[test]
    fn test_size_in_const_context() {
        const fn size_of(id: &NanoId) -> usize {
            id.size()
        }
        let id = NanoId::new("abcd").unwrap();
        assert_eq!(size_of(&id), 4);
    }

    #[test]
    fn test_with_size_zero() {
        let id = NanoId::with_size(0);
        assert_eq!(id.size(), 0);
        assert_eq!(id.value(), "");
    }

    #[test]
    fn test_no_collisions_in_ten_thousand() {
        let mut ids = HashSet::new();
        for _ in 0..10_000 {
            let id = NanoId::generate();
            assert!(!ids.contains(&id), "Collision on {}", id);
            ids.insert(id);
        }
        assert_eq!(ids.len(), 10_000);
    }

    // ========== Validation ==========

    #[test]
    fn test_new_valid() {
        let id = NanoId::new("abc").unwrap();
        assert_eq!(id.value(), "abc");
        assert_eq!(id.size(), 3);
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_new_invalid() {
        assert!(NanoId::new("!!!").is_none());
    }

    #[test]
    fn test_new_rejects_space_emoji_newline() {
        assert!(NanoId::new("abc def").is_none());
        assert!(NanoId::new("abc🙂def").is_none());
        assert!(NanoId::new("abc\ndef").is_none());
    }

    #[test]
    fn test_new_empty_is_valid() {
        let id = NanoId::new("").unwrap();
        assert_eq!(id.size(), 0);
        assert_eq!(id.value(), "");
    }

    #[test]
    fn test_new_keeps_value_untouched() {
        let id = NanoId::new("AbC-_").unwrap();
        assert_eq!(id.value(), "AbC-_");
        assert_ne!(id, NanoId::new("abc-_").unwrap());
    }

    #[test]
    fn test_new_alphabet_prefix() {
        let s: String = ALPHABET.chars().take(10).collect();
        let id = NanoId::new(s.clone()).unwrap();
        assert_eq!(id.value(), s);
    }

    #[test]
    fn test_display_alphabet_suffix() {
        let s = &ALPHABET[ALPHABET.len() - 12..];
        let id = NanoId::new(s).unwrap();
        assert_eq!(id.to_string(), s);
        assert_eq!(id.to_string(), id.value());
    }

    // ========== Equality and hashing ==========

    #[test]
    fn test_equality() {
        let id1 = NanoId::new("abc");
        let id2 = NanoId::new("abc");
        let id3 = NanoId::generate();

        assert_eq!(id1, id2);
        assert_ne!(id1, Some(id3));
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(NanoId::new("abc").unwrap(), 1);
        map.insert(NanoId::new("abc").unwrap(), 2);
        map.insert(NanoId::new("xyz").unwrap(), 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("abc"), Some(&2));
    }

    // ========== Conversions ==========

    #[test]
    fn test_lossless_round_trip() {
        let original = NanoId::with_size(21);
        let round_tripped = NanoId::new(original.to_string()).unwrap();

        assert_eq!(round_tripped.value(), original.value());
        assert_eq!(round_tripped.to_string(), original.to_string());
    }

    #[test]
    fn test_from_str() {
        let id: NanoId = "a7x_-Q".parse().unwrap();
        assert_eq!(id.value(), "a7x_-Q");
    }

    #[test]
    fn test_from_str_reports_offender() {
        let err = "ab!".parse::<NanoId>().unwrap_err();
        assert_eq!(
            err,
            NanoIdError::InvalidCharacter {
                id: "ab!".to_string(),
                ch: '!',
                position: 2,
            }
        );
    }

    #[test]
    fn test_try_from() {
        assert!(NanoId::try_from("abc").is_ok());
        assert!(NanoId::try_from(String::from("abc")).is_ok());
        assert!(NanoId::try_from("a.b").is_err());
    }

    #[test]
    fn test_into_string() {
        let id = NanoId::new("xyz").unwrap();
        let s: String = id.clone().into();
        assert_eq!(s, "xyz");
        assert_eq!(id.into_inner(), "xyz");
    }

    #[test]
    fn test_as_ref() {
        let id = NanoId::new("xyz").unwrap();
        let s: &str = id.as_ref();
        assert_eq!(s, "xyz");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NanoId>();
    }

    #[test]
    fn test_generate_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| NanoId::generate()).collect::<Vec<_>>()))
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert_eq!(id.size(), 21);
                all.insert(id);
            }
        }
        assert_eq!(all.len(), 400);
    }
}
