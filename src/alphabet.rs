/// The 64 URL-safe characters an ID may contain.
pub const ALPHABET: &str = "useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Number of characters in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 64;

const ALPHABET_BYTES: &[u8] = ALPHABET.as_bytes();

/// Returns true if `c` belongs to the alphabet.
#[must_use]
pub fn is_alphabet_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(|b| ALPHABET_BYTES.contains(&b))
}

/// Alphabet character at `index`; `index` must be below [`ALPHABET_LEN`].
pub(crate) fn char_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN, "alphabet index {index} out of range");
    char::from(ALPHABET_BYTES[index])
}

/// First character outside the alphabet with its char position, if any.
#[must_use]
pub fn first_invalid_char(s: &str) -> Option<(usize, char)> {
    s.chars().enumerate().find(|&(_, c)| !is_alphabet_char(c))
}
