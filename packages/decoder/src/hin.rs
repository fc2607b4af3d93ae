//! Hull Identification Number parsing and decoding.
//!
//! Parses a raw 12-character HIN into its structural segments and derives
//! the production date fields.
//!
//! # Format
//!
//! ```text
//! B M A 4 5 6 7 8 H 4 8 5
//! ╰MIC─╯ ╰─serial──╯ │ │ ╰─╯ 2-digit model year
//!                    │ ╰──── production year digit (units of the calendar year)
//!                    ╰────── production month letter (A=January .. L=December)
//! ```
//!
//! # Examples
//!
//! ```
//! use hullid_decoder::HinCode;
//!
//! let hin = HinCode::parse("BMA45678H485").unwrap();
//! assert_eq!(hin.manufacturer_code(), "BMA");
//! assert_eq!(hin.serial_number(), "45678");
//! assert_eq!(hin.production_month(), 8);
//! assert_eq!(hin.model_year(), Some(1985));
//! assert_eq!(hin.production_year(), Some(1984));
//! ```

use std::fmt;

use crate::config::{
    expand_model_year, is_serial_character, validate_mic, HIN_LENGTH, MANUFACTURER_PLACEHOLDER,
    MINIMUM_MODEL_YEAR, SERIAL_START,
};
use crate::error::{HinError, Result};
use crate::manufacturer::ManufacturerResolver;

/// A validated, immutable Hull Identification Number.
///
/// Construction via [`HinCode::parse`] is the only way to obtain a value,
/// so every accessor can rely on the format invariants and is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HinCode {
    /// Normalized (uppercase) 12-character code.
    hin: String,
    /// Production month, 1-12, decoded from the month letter.
    production_month: u8,
    /// Units digit of the production calendar year.
    production_year_digit: u8,
    /// 2-digit model year code, 0-99.
    model_year_raw: u8,
}

impl HinCode {
    /// Parse and validate a raw HIN string.
    ///
    /// Input is normalized to ASCII upper case, then checked gate by gate:
    /// length, manufacturer code, serial number, production month,
    /// production year digit, model year. The first failing gate
    /// determines the error.
    ///
    /// # Errors
    ///
    /// Returns the [`HinError`] variant for the first violated invariant.
    pub fn parse(raw: &str) -> Result<Self> {
        let hin = raw.to_ascii_uppercase();
        let chars: Vec<char> = hin.chars().collect();

        if chars.len() != HIN_LENGTH {
            return Err(HinError::InvalidLength(chars.len()));
        }

        let mic: String = chars[..SERIAL_START].iter().collect();
        validate_mic(&mic)?;

        for (offset, &c) in chars[SERIAL_START..8].iter().enumerate() {
            if !is_serial_character(c) {
                return Err(HinError::InvalidSerialCharacter {
                    character: c,
                    position: SERIAL_START + offset,
                });
            }
        }

        let production_month =
            month_number(chars[8]).ok_or(HinError::InvalidProductionMonth(chars[8]))?;

        let production_year_digit =
            decimal_digit(chars[9]).ok_or(HinError::InvalidProductionYear(chars[9]))?;

        let model_year_raw = match (decimal_digit(chars[10]), decimal_digit(chars[11])) {
            (Some(tens), Some(units)) => tens * 10 + units,
            _ => return Err(HinError::InvalidModelYear(chars[10..].iter().collect())),
        };

        tracing::debug!(hin = %hin, "Validated HIN");

        Ok(Self {
            hin,
            production_month,
            production_year_digit,
            model_year_raw,
        })
    }

    /// Get the normalized 12-character code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hin
    }

    /// Get the 3-character manufacturer identification code.
    #[must_use]
    pub fn manufacturer_code(&self) -> &str {
        &self.hin[..SERIAL_START]
    }

    /// Get the 5-character hull serial number.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.hin[SERIAL_START..8]
    }

    /// Get the raw 2-character production date segment.
    ///
    /// This is the month letter followed by the year digit (e.g. `H4`),
    /// exposed for diagnostics and display. Callers that need structured
    /// data should use [`production_month`](Self::production_month) and
    /// [`production_year`](Self::production_year) instead.
    #[must_use]
    pub fn raw_production_date(&self) -> &str {
        &self.hin[8..10]
    }

    /// Get the production month, 1-12 (A=1 .. L=12).
    #[must_use]
    pub fn production_month(&self) -> u8 {
        self.production_month
    }

    /// Get the 4-digit model year.
    ///
    /// The 2-digit code expands through the fixed century pivot
    /// ([`crate::config::CENTURY_PIVOT`]). Returns `None` when the
    /// expansion lands below [`MINIMUM_MODEL_YEAR`]: such a code is still
    /// syntactically valid, but its date fields carry no trustworthy
    /// information.
    #[must_use]
    pub fn model_year(&self) -> Option<u16> {
        let year = expand_model_year(self.model_year_raw);
        (year >= MINIMUM_MODEL_YEAR).then_some(year)
    }

    /// Get the 4-digit production (calendar) year.
    ///
    /// The model year with its final digit replaced by the production
    /// year digit; the two can legitimately differ by one, since hulls
    /// are often built in the calendar year preceding their model year.
    /// Returns `None` whenever [`model_year`](Self::model_year) does.
    #[must_use]
    pub fn production_year(&self) -> Option<u16> {
        self.model_year()
            .map(|year| year - year % 10 + u16::from(self.production_year_digit))
    }

    /// Get the manufacturer name placeholder.
    ///
    /// MIC-to-name registry data is not shipped with this crate; this
    /// always returns the fixed placeholder. Use
    /// [`manufacturer_with`](Self::manufacturer_with) to consult a
    /// [`ManufacturerResolver`].
    #[must_use]
    pub fn manufacturer(&self) -> &'static str {
        MANUFACTURER_PLACEHOLDER
    }

    /// Resolve the manufacturer name through the given resolver.
    ///
    /// Falls back to the placeholder when the resolver does not know the
    /// MIC.
    #[must_use]
    pub fn manufacturer_with(&self, resolver: &dyn ManufacturerResolver) -> String {
        resolver
            .resolve(self.manufacturer_code())
            .unwrap_or_else(|| MANUFACTURER_PLACEHOLDER.to_string())
    }
}

impl fmt::Display for HinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model_year() {
            Some(year) => write!(f, "{} [MY: {year}]", self.hin),
            None => write!(f, "{} [MY: unknown]", self.hin),
        }
    }
}

/// Map a production month letter to its month number.
fn month_number(c: char) -> Option<u8> {
    match c {
        'A'..='L' => Some(c as u8 - b'A' + 1),
        _ => None,
    }
}

/// Decode a decimal digit character.
fn decimal_digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}
