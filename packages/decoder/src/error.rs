//! Error types for HIN decoding.

use thiserror::Error;

/// Main error type for HIN construction.
///
/// Construction is the only fallible operation; each variant corresponds
/// to one validation gate, and the first failing gate determines the
/// variant. Accessors on a constructed [`crate::HinCode`] never fail.
#[derive(Debug, Error)]
pub enum HinError {
    /// Input is not exactly 12 characters long.
    #[error("Invalid HIN length: expected 12 characters, got {0}")]
    InvalidLength(usize),

    /// Manufacturer identification code segment fails the character-class check.
    #[error("Invalid manufacturer code '{0}': expected 3 alphanumeric characters (e.g., BMA)")]
    InvalidManufacturerCode(String),

    /// A serial number character is outside the restricted alphabet.
    ///
    /// `position` is the 0-based index within the full 12-character code.
    #[error("Invalid serial number character '{character}' at position {position}: expected A-Z (excluding I, O, Q) or 0-9")]
    InvalidSerialCharacter { character: char, position: usize },

    /// Production month letter is not in A-L.
    #[error("Invalid production month '{0}': expected a letter A-L (A=January)")]
    InvalidProductionMonth(char),

    /// Production year character is not a decimal digit.
    #[error("Invalid production year digit '{0}': expected 0-9")]
    InvalidProductionYear(char),

    /// Model year segment is not two decimal digits.
    #[error("Invalid model year '{0}': expected two decimal digits")]
    InvalidModelYear(String),
}

/// Result type alias for HIN operations.
pub type Result<T> = std::result::Result<T, HinError>;
