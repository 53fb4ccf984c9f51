//! Vehicle class definitions.
//!
//! A vehicle class is one numbered `VehicleClass[ID] = { ... }` entry from the
//! master table. Entries are kept as raw source text: the loader only needs
//! the ID, the `Code` field and the text itself, which is both scanned for
//! dependencies and re-emitted verbatim.

use std::collections::{BTreeMap, BTreeSet};

/// Numeric vehicle class ID.
pub type VehicleId = u32;

/// Code used when an entry has no `["Code"]` field.
pub const UNKNOWN_CODE: &str = "Unknown";

/// One vehicle class entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleClass {
    pub id: VehicleId,
    /// Short code from the nested `["Code"]` field.
    pub code: String,
    /// Source text from `VehicleClass[ID]` through the closing brace.
    pub source: String,
}

impl VehicleClass {
    pub fn new(id: VehicleId, code: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            source: source.into(),
        }
    }

    /// Whether the entry carried a `Code` field.
    pub fn has_code(&self) -> bool {
        self.code != UNKNOWN_CODE
    }
}

/// All vehicle classes from the master table, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    /// Shared header/global logic preceding the first entry.
    pub preamble: Option<String>,
    entries: BTreeMap<VehicleId, VehicleClass>,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any earlier entry with the same ID.
    pub fn insert(&mut self, class: VehicleClass) -> Option<VehicleClass> {
        self.entries.insert(class.id, class)
    }

    pub fn get(&self, id: VehicleId) -> Option<&VehicleClass> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &VehicleClass> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Vehicles registered unconditionally, regardless of mission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlwaysInclude {
    /// Table source with its `VehicleClass = {}` initialiser removed.
    pub source: String,
    pub ids: BTreeSet<VehicleId>,
}

impl AlwaysInclude {
    pub fn contains(&self, id: VehicleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_insert_overwrites() {
        let mut catalog = VehicleCatalog::new();
        catalog.insert(VehicleClass::new(5, "A", "first"));
        let previous = catalog.insert(VehicleClass::new(5, "B", "second"));

        assert_eq!(previous.map(|c| c.code), Some("A".to_string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(5).unwrap().source, "second");
    }

    #[test]
    fn test_catalog_iterates_by_id() {
        let mut catalog = VehicleCatalog::new();
        catalog.insert(VehicleClass::new(30, "C", ""));
        catalog.insert(VehicleClass::new(2, "A", ""));
        catalog.insert(VehicleClass::new(11, "B", ""));

        let ids: Vec<_> = catalog.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 11, 30]);
    }

    #[test]
    fn test_has_code() {
        assert!(VehicleClass::new(1, "DD", "").has_code());
        assert!(!VehicleClass::new(1, UNKNOWN_CODE, "").has_code());
    }
}
