//! Format constants and validation helpers for Hull Identification Numbers.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HinError, Result};

/// Total length of a HIN in characters.
pub const HIN_LENGTH: usize = 12;

/// Index of the first serial number character (serial occupies 3..8).
pub const SERIAL_START: usize = 3;

/// Minimum supported model year.
///
/// The 12-character HIN format with a 2-digit model year segment was
/// mandated in August 1984; codes resolving to earlier years carry no
/// trustworthy date information and are reported as unknown.
pub const MINIMUM_MODEL_YEAR: u16 = 1984;

/// Century pivot for 2-digit model year expansion.
///
/// Two-digit values below the pivot expand into the 2000s, values at or
/// above it into the 1900s. The pivot is a fixed constant: expansion must
/// not depend on the calendar time of the call, or the same HIN would
/// decode to different years on different days.
pub const CENTURY_PIVOT: u8 = 70;

/// Characters permitted in the serial number segment.
///
/// The letters I, O, and Q are excluded by regulation to avoid confusion
/// with the digits 1 and 0.
pub const SERIAL_ALPHABET: &str = "ABCDEFGHJKLMNPRSTUVWXYZ1234567890";

/// Placeholder returned when no manufacturer name is known for a MIC.
pub const MANUFACTURER_PLACEHOLDER: &str = "TBD";

/// MIC pattern: exactly 3 uppercase alphanumeric characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{3}$").expect("valid regex"));

/// Validate a manufacturer identification code segment.
///
/// Every character of the 3-character segment must be uppercase
/// alphanumeric. The input is expected to be normalized to upper case
/// already.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(HinError::InvalidManufacturerCode)` if invalid
///
/// # Examples
/// ```
/// use hullid_decoder::config::validate_mic;
///
/// assert!(validate_mic("BMA").is_ok());
/// assert!(validate_mic("B!A").is_err());
/// ```
pub fn validate_mic(mic: &str) -> Result<()> {
    if MIC_PATTERN.is_match(mic) {
        Ok(())
    } else {
        Err(HinError::InvalidManufacturerCode(mic.to_string()))
    }
}

/// Check whether a character is permitted in the serial number segment.
///
/// # Examples
/// ```
/// use hullid_decoder::config::is_serial_character;
///
/// assert!(is_serial_character('A'));
/// assert!(is_serial_character('7'));
/// assert!(!is_serial_character('I')); // Confusable with 1
/// assert!(!is_serial_character('O')); // Confusable with 0
/// ```
#[must_use]
pub fn is_serial_character(c: char) -> bool {
    SERIAL_ALPHABET.contains(c)
}

/// Expand a 2-digit model year code to a 4-digit calendar year.
///
/// Values 00–69 resolve to the 2000s, 70–99 to the 1900s. The result is
/// not checked against [`MINIMUM_MODEL_YEAR`]; callers decide how to
/// report implausibly old years.
///
/// # Examples
/// ```
/// use hullid_decoder::config::expand_model_year;
///
/// assert_eq!(expand_model_year(8), 2008);
/// assert_eq!(expand_model_year(85), 1985);
/// ```
#[must_use]
pub fn expand_model_year(two_digit: u8) -> u16 {
    if two_digit < CENTURY_PIVOT {
        2000 + u16::from(two_digit)
    } else {
        1900 + u16::from(two_digit)
    }
}
