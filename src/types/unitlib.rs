//! Supplemental unit-library data.
//!
//! `master_unitlib.lua` holds one outer table of groups, each group a list of
//! entries keyed to a vehicle class by their `["VehicleClass"]` field. A
//! vehicle class may own several entries, possibly in different groups.

use std::collections::BTreeMap;

use super::vehicle::VehicleId;

/// Header used when the source has no opening brace.
pub const DEFAULT_UNIT_LIB_HEADER: &str = "UnitLib = {";

/// One unit-library record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLibEntry {
    pub vehicle_class: VehicleId,
    /// The entry block, braces included.
    pub source: String,
}

/// A group of entries sharing a category in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitLibGroup {
    /// Text preceding the first entry (group name fields, comments).
    pub header: Option<String>,
    pub entries: Vec<UnitLibEntry>,
}

impl UnitLibGroup {
    /// Entries whose vehicle class satisfies `keep`, in source order.
    pub fn filtered<'a>(
        &'a self,
        keep: impl Fn(VehicleId) -> bool + 'a,
    ) -> impl Iterator<Item = &'a UnitLibEntry> + 'a {
        self.entries.iter().filter(move |e| keep(e.vehicle_class))
    }
}

/// Position of an entry: (group index, entry index).
type EntryRef = (usize, usize);

/// The whole unit library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLib {
    /// Source text up to and including the container's opening brace.
    pub header: String,
    groups: Vec<UnitLibGroup>,
    by_class: BTreeMap<VehicleId, Vec<EntryRef>>,
}

impl Default for UnitLib {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT_LIB_HEADER)
    }
}

impl UnitLib {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            groups: Vec::new(),
            by_class: BTreeMap::new(),
        }
    }

    /// Append a group and index its entries. Empty groups are ignored.
    pub fn push_group(&mut self, group: UnitLibGroup) {
        if group.entries.is_empty() {
            return;
        }
        let group_idx = self.groups.len();
        for (entry_idx, entry) in group.entries.iter().enumerate() {
            self.by_class
                .entry(entry.vehicle_class)
                .or_default()
                .push((group_idx, entry_idx));
        }
        self.groups.push(group);
    }

    /// Groups in source order.
    pub fn groups(&self) -> &[UnitLibGroup] {
        &self.groups
    }

    /// All entries owned by a vehicle class, in source order.
    pub fn entries_for(&self, id: VehicleId) -> impl Iterator<Item = &UnitLibEntry> {
        self.by_class
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&(group, entry)| &self.groups[group].entries[entry])
    }

    /// Vehicle classes with at least one entry, ascending.
    pub fn vehicle_classes(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.by_class.keys().copied()
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: VehicleId, text: &str) -> UnitLibEntry {
        UnitLibEntry {
            vehicle_class: id,
            source: text.to_string(),
        }
    }

    #[test]
    fn test_index_spans_groups() {
        let mut lib = UnitLib::default();
        lib.push_group(UnitLibGroup {
            header: None,
            entries: vec![entry(10, "a"), entry(11, "b")],
        });
        lib.push_group(UnitLibGroup {
            header: Some("-- Planes".to_string()),
            entries: vec![entry(10, "c")],
        });

        let sources: Vec<_> = lib.entries_for(10).map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["a", "c"]);
        assert_eq!(lib.entries_for(99).count(), 0);
        assert_eq!(lib.entry_count(), 3);
        assert_eq!(lib.vehicle_classes().collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn test_empty_group_is_ignored() {
        let mut lib = UnitLib::default();
        lib.push_group(UnitLibGroup::default());
        assert!(lib.is_empty());
    }

    #[test]
    fn test_group_filtered() {
        let group = UnitLibGroup {
            header: None,
            entries: vec![entry(1, "a"), entry(2, "b"), entry(1, "c")],
        };
        let kept: Vec<_> = group.filtered(|id| id == 1).map(|e| e.source.as_str()).collect();
        assert_eq!(kept, vec!["a", "c"]);
    }
}
