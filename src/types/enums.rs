//! Enum name → numeric ID registry.

use std::collections::HashMap;

use crate::error::Result;
use crate::parser::enums::parse_enums;

use super::vehicle::VehicleId;

/// Flat mapping from enum entry names to their values.
///
/// Every enum table feeds the same namespace. A name defined twice keeps the
/// value it was given last.
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    values: HashMap<String, i64>,
    tables: Vec<String>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an enum source and merge its entries into the registry.
    ///
    /// Returns the number of entries read from `source`.
    pub fn load(&mut self, source: &str) -> Result<usize> {
        let mut added = 0;
        for table in parse_enums(source)? {
            added += table.entries.len();
            for (name, value) in table.entries {
                self.values.insert(name, value);
            }
            self.tables.push(table.name);
        }
        Ok(added)
    }

    /// Insert a single entry.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), value);
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Lookup restricted to values usable as vehicle class IDs.
    pub fn resolve_vehicle(&self, name: &str) -> Option<VehicleId> {
        self.resolve(name).and_then(|value| VehicleId::try_from(value).ok())
    }

    /// Names of the enum tables loaded so far, in load order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
