//! Hullid Decoder - Decode and validate Hull Identification Numbers.
//!
//! A Hull Identification Number (HIN) is a fixed 12-character code
//! assigned to a watercraft hull, analogous in purpose to a vehicle VIN.
//! This crate parses a raw string into its structural segments
//! (manufacturer code, serial number, production date, model year) and
//! rejects strings that are not syntactically well-formed HINs.
//!
//! # Example
//!
//! ```
//! use hullid_decoder::HinCode;
//!
//! let hin = HinCode::parse("BMA45678H485").unwrap();
//! assert_eq!(hin.manufacturer_code(), "BMA");
//! assert_eq!(hin.serial_number(), "45678");
//! assert_eq!(hin.model_year(), Some(1985));
//! assert_eq!(hin.production_year(), Some(1984));
//!
//! assert!(HinCode::parse("!TN34945E787").is_err());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Format constants and segment validation
//! - [`error`]: Error types and Result alias
//! - [`hin`]: The `HinCode` value type
//! - [`manufacturer`]: Pluggable MIC-to-name lookup
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod hin;
pub mod manufacturer;

// Re-export commonly used items
pub use config::{MANUFACTURER_PLACEHOLDER, MINIMUM_MODEL_YEAR};
pub use error::{HinError, Result};
pub use hin::HinCode;
pub use manufacturer::{ManufacturerResolver, ManufacturerTable, UnresolvedManufacturers};
