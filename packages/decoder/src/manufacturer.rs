//! Pluggable manufacturer identification code lookup.
//!
//! Mapping a MIC to a manufacturer name requires registry data this crate
//! does not ship. The lookup is therefore a capability layered over
//! [`HinCode`](crate::HinCode): callers pass a [`ManufacturerResolver`] to
//! [`manufacturer_with`](crate::HinCode::manufacturer_with), and without
//! one every lookup falls back to the fixed placeholder.

use std::collections::HashMap;

/// Resolve a manufacturer identification code to a display name.
pub trait ManufacturerResolver {
    /// Look up the name for a 3-character MIC.
    ///
    /// Returns `None` when the code is not known to this resolver.
    fn resolve(&self, mic: &str) -> Option<String>;
}

/// Default resolver that knows no manufacturers.
///
/// Every lookup returns `None`, so callers always see the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedManufacturers;

impl ManufacturerResolver for UnresolvedManufacturers {
    fn resolve(&self, _mic: &str) -> Option<String> {
        None
    }
}

/// In-memory MIC-to-name table.
///
/// Lookup is case-insensitive on the MIC.
#[derive(Debug, Clone, Default)]
pub struct ManufacturerTable {
    entries: HashMap<String, String>,
}

impl ManufacturerTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, mic: impl Into<String>, name: impl Into<String>) {
        self.entries
            .insert(mic.into().to_ascii_uppercase(), name.into());
    }

    /// Number of known manufacturers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: Into<String>, N: Into<String>> FromIterator<(M, N)> for ManufacturerTable {
    fn from_iter<T: IntoIterator<Item = (M, N)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (mic, name) in iter {
            table.insert(mic, name);
        }
        table
    }
}

impl ManufacturerResolver for ManufacturerTable {
    fn resolve(&self, mic: &str) -> Option<String> {
        self.entries.get(&mic.to_ascii_uppercase()).cloned()
    }
}
