//! Region -> languages grouping derived from the locale catalog.

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::LocaleCatalog;

/// Languages offered in one region, plus the flag shown for the region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionGroup {
    /// Distinct languages in first-seen catalog order.
    pub languages: Vec<String>,
    /// Flag of the first locale seen for this region.
    pub flag: String,
}

/// Regions in first-seen catalog order, each with its languages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionIndex {
    regions: IndexMap<String, RegionGroup>,
}

impl RegionIndex {
    /// Fold the catalog into a region index.
    pub fn build(catalog: &LocaleCatalog) -> Self {
        let mut regions: IndexMap<String, RegionGroup> = IndexMap::new();
        for (_, entry) in catalog.iter() {
            match regions.get_mut(entry.region.as_str()) {
                Some(group) => {
                    if !group.languages.contains(&entry.language) {
                        group.languages.push(entry.language.clone());
                    }
                }
                None => {
                    regions.insert(
                        entry.region.clone(),
                        RegionGroup {
                            languages: vec![entry.language.clone()],
                            flag: entry.flag.clone(),
                        },
                    );
                }
            }
        }
        Self { regions }
    }

    /// Region codes in display order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionGroup)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, region: &str) -> Option<&RegionGroup> {
        self.regions.get(region)
    }

    /// Languages for `region`; empty for an unknown region.
    pub fn languages(&self, region: &str) -> &[String] {
        self.get(region)
            .map(|g| g.languages.as_slice())
            .unwrap_or_default()
    }

    pub fn first_language(&self, region: &str) -> Option<&str> {
        self.languages(region).first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
