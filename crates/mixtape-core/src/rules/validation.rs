//! Identifier validation
//!
//! Every identifier in the store (user, song, playlist, and each song id a
//! playlist references) must be the decimal form of an unsigned 32-bit
//! integer. Only ASCII digits are accepted: no sign, no whitespace, no
//! empty string.

use crate::errors::{MixtapeError, Result};
use crate::model::EntityKind;

/// Parse an identifier into its numeric value
///
/// # Errors
///
/// Returns `InvalidIdentifier` tagged with `entity` if `id` is empty,
/// contains anything other than ASCII digits, or exceeds `u32::MAX`.
pub fn parse_identifier(entity: EntityKind, id: &str) -> Result<u32> {
    let invalid = || MixtapeError::InvalidIdentifier {
        entity,
        id: id.to_string(),
    };

    // `u32::from_str` accepts a leading '+', so check the digits first
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    id.parse::<u32>().map_err(|_| invalid())
}

/// Check an identifier without keeping its numeric value
///
/// # Errors
///
/// Same as [`parse_identifier`].
pub fn validate_identifier(entity: EntityKind, id: &str) -> Result<()> {
    parse_identifier(entity, id).map(|_| ())
}
