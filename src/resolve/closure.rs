//! Transitive dependency closure over vehicle classes.
//!
//! A vehicle class depends on every vehicle whose enum name appears as a
//! quoted token in its definition (carried planes, escorts, spawned units).

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::parser::fields::quoted_tokens;
use crate::types::{EnumRegistry, VehicleCatalog, VehicleClass, VehicleId};

/// Vehicle IDs a single class refers to directly.
pub fn direct_dependencies(class: &VehicleClass, enums: &EnumRegistry) -> BTreeSet<VehicleId> {
    quoted_tokens(&class.source)
        .filter_map(|token| enums.resolve_vehicle(token))
        .collect()
}

/// Close a seed set over catalog dependencies.
///
/// The result contains every seed (catalogued or not) plus everything
/// reachable from them. Each ID is expanded at most once, so the walk is
/// bounded by the catalog size.
pub fn close_over(
    seeds: impl IntoIterator<Item = VehicleId>,
    enums: &EnumRegistry,
    vehicles: &VehicleCatalog,
) -> BTreeSet<VehicleId> {
    let mut required: BTreeSet<VehicleId> = seeds.into_iter().collect();
    let mut queue: VecDeque<VehicleId> = required.iter().copied().collect();
    let mut processed: HashSet<VehicleId> = HashSet::new();

    while let Some(id) = queue.pop_front() {
        if !processed.insert(id) {
            continue;
        }
        let Some(class) = vehicles.get(id) else {
            continue;
        };
        for dependency in direct_dependencies(class, enums) {
            if required.insert(dependency) {
                queue.push_back(dependency);
            }
        }
    }

    required
}
