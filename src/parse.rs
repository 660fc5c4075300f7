use crate::alphabet::first_invalid_char;
use crate::error::{NanoIdError, Result};
use crate::id::NanoId;

/// Validates a string and wraps it as a [`NanoId`].
///
/// Every character must belong to the alphabet. The input is kept as-is: no
/// lowercasing, no trimming. The empty string is a valid (size 0) ID.
///
/// # Errors
///
/// Returns `InvalidCharacter` naming the first character outside the alphabet
/// and its position (in chars).
pub fn parse_id(candidate: impl Into<String>) -> Result<NanoId> {
    let id = candidate.into();

    if let Some((position, ch)) = first_invalid_char(&id) {
        log::debug!("rejected ID {id:?}: invalid character {ch:?} at position {position}");
        return Err(NanoIdError::InvalidCharacter { id, ch, position });
    }

    Ok(NanoId::from_valid(id))
}

/// Returns true if the given string would parse as a [`NanoId`].
#[must_use]
pub fn is_valid_id_format(id: &str) -> bool {
    first_invalid_char(id).is_none()
}
