//! Conversion of raw player records into typed players.
//!
//! Heights follow a narrow grammar: `digit digit separator rest`. The two
//! digits are the height in inches; `rest` is kept verbatim so that the raw
//! value can always be reconstructed. The separator character itself is not
//! checked.

use super::PlayerRecord;
use crate::constants::{EXPERIENCED_FLAG, GUARDIAN_SEPARATOR, HEIGHT_DIGITS};
use crate::error::AppError;

/// A player with typed fields, derived from a [`PlayerRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPlayer {
    pub name: String,
    pub height_inches: u32,
    /// Everything after the digits and the separator, e.g. `"inches"`
    pub height_remainder: String,
    pub experienced: bool,
    /// Never empty
    pub guardians: Vec<String>,
}

/// Splits a raw height into its inches value and the trailing remainder.
///
/// # Examples
/// ```
/// use hoops_stats::roster::parse_height;
///
/// let (inches, rest) = parse_height("Karl Saygan", "42 inches").unwrap();
/// assert_eq!(inches, 42);
/// assert_eq!(rest, "inches");
/// ```
///
/// # Errors
/// Returns `AppError::MalformedHeight` when the first two characters are not
/// both ASCII digits.
pub fn parse_height(player: &str, height: &str) -> Result<(u32, String), AppError> {
    let digits = height
        .get(..HEIGHT_DIGITS)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| AppError::malformed_height(player, height))?;

    let inches = digits
        .parse::<u32>()
        .map_err(|_| AppError::malformed_height(player, height))?;

    // Skip one separator character of any width.
    let mut rest = height[HEIGHT_DIGITS..].chars();
    rest.next();

    Ok((inches, rest.as_str().to_string()))
}

/// Normalizes a single record.
pub fn normalize_player(record: &PlayerRecord) -> Result<NormalizedPlayer, AppError> {
    let (height_inches, height_remainder) = parse_height(&record.name, &record.height)?;

    let experienced = record.experience == EXPERIENCED_FLAG;
    if !experienced && record.experience != "NO" {
        tracing::trace!(
            "Unrecognized experience flag '{}' for {}, treating as inexperienced",
            record.experience,
            record.name
        );
    }

    let guardians = record
        .guardians
        .split(GUARDIAN_SEPARATOR)
        .map(str::to_string)
        .collect();

    Ok(NormalizedPlayer {
        name: record.name.clone(),
        height_inches,
        height_remainder,
        experienced,
        guardians,
    })
}

/// Normalizes a whole roster, preserving order.
///
/// The input is never modified. Fails on the first record with a malformed height.
pub fn normalize(players: &[PlayerRecord]) -> Result<Vec<NormalizedPlayer>, AppError> {
    players.iter().map(normalize_player).collect()
}
