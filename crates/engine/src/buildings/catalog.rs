use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::BuildingSize;

/// What the engine needs to know about a catalog building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Base (unrotated) size.
    pub size: BuildingSize,
    pub color: u32,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Lookup of catalog buildings by id.
///
/// A `None` result means the record cannot be resolved; callers skip it.
pub trait BuildingCatalog {
    fn lookup(&self, building_id: u32) -> Option<&CatalogEntry>;

    fn base_size(&self, building_id: u32) -> Option<BuildingSize> {
        self.lookup(building_id).map(|entry| entry.size)
    }
}

impl<S: std::hash::BuildHasher> BuildingCatalog for HashMap<u32, CatalogEntry, S> {
    fn lookup(&self, building_id: u32) -> Option<&CatalogEntry> {
        self.get(&building_id)
    }
}

impl BuildingCatalog for BTreeMap<u32, CatalogEntry> {
    fn lookup(&self, building_id: u32) -> Option<&CatalogEntry> {
        self.get(&building_id)
    }
}
