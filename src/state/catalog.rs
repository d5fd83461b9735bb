use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GardenError, Result};
use crate::models::{Mutation, Plant, RedeemCode};

#[derive(Deserialize)]
struct PlantsFile {
    plants: Vec<Plant>,
}

#[derive(Deserialize)]
struct MutationsFile {
    mutations: Vec<Mutation>,
}

#[derive(Deserialize)]
struct CodesFile {
    codes: Vec<RedeemCode>,
}

/// The immutable game-data catalog, loaded whole before any calculation runs.
///
/// Record order is insertion order from the data files; ranking ties keep it.
pub struct Catalog {
    pub plants: Vec<Plant>,
    pub mutations: Vec<Mutation>,
    pub codes: Vec<RedeemCode>,
}

impl Catalog {
    /// Load plants.json, mutations.json, and codes.json from a data directory.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Catalog> {
        let dir = dir.as_ref();

        let plants_raw = fs::read_to_string(dir.join("plants.json"))?;
        let plants_file: PlantsFile = serde_json::from_str(&plants_raw)?;

        let mutations_raw = fs::read_to_string(dir.join("mutations.json"))?;
        let mutations_file: MutationsFile = serde_json::from_str(&mutations_raw)?;

        let codes_raw = fs::read_to_string(dir.join("codes.json"))?;
        let codes_file: CodesFile = serde_json::from_str(&codes_raw)?;

        let catalog = Catalog {
            plants: dedup_by_key(plants_file.plants, |p| p.key()),
            mutations: dedup_by_key(mutations_file.mutations, |m| m.key.clone()),
            codes: codes_file.codes,
        };

        if catalog.plants.is_empty() {
            return Err(GardenError::EmptyCatalog);
        }

        Ok(catalog)
    }

    /// Find a plant by slug or display name, case-insensitive.
    pub fn find_plant(&self, query: &str) -> Option<&Plant> {
        let q = query.trim().to_lowercase();
        self.plants
            .iter()
            .find(|p| p.key() == q || p.name.to_lowercase() == q)
    }

    /// Resolve mutation keys to records, preserving order and dropping duplicates.
    pub fn mutations_by_keys(&self, keys: &[String]) -> Result<Vec<&Mutation>> {
        let mut seen: Vec<String> = Vec::new();
        let mut resolved = Vec::new();

        for key in keys {
            let k = key.trim().to_lowercase();
            if seen.contains(&k) {
                continue;
            }
            let mutation = self
                .mutations
                .iter()
                .find(|m| m.key.to_lowercase() == k)
                .ok_or_else(|| GardenError::MutationNotFound(key.clone()))?;
            seen.push(k);
            resolved.push(mutation);
        }

        Ok(resolved)
    }
}

/// Deduplicate records by key: last occurrence wins, first position is kept.
fn dedup_by_key<T, F>(records: Vec<T>, key_of: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::with_capacity(records.len());

    for record in records {
        let key = key_of(&record);
        match index.get(&key) {
            Some(&i) => out[i] = record,
            None => {
                index.insert(key, out.len());
                out.push(record);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        let plants = r#"{"plants": [
            {"slug": "sunberry", "name": "Sunberry", "rarity": "Common",
             "cost": 100, "baseValue": 200, "growTimeSec": 3600, "avgWeight": 1.0,
             "multiHarvest": false, "data_source": "wiki",
             "last_verified_at": "2026-08-01", "confidence": "A"},
            {"slug": "moonvine", "name": "Moonvine", "rarity": "Rare",
             "cost": 450, "baseValue": 380, "growTimeSec": 5400, "avgWeight": 2.4,
             "multiHarvest": true, "data_source": "wiki",
             "last_verified_at": "2026-07-15", "confidence": "B"},
            {"slug": "sunberry", "name": "Sunberry (revised)", "rarity": "Common",
             "cost": 110, "baseValue": 200, "growTimeSec": 3600, "avgWeight": 1.0,
             "multiHarvest": false, "data_source": "in-game test",
             "last_verified_at": "2026-08-10", "confidence": "A"}
        ]}"#;

        let mutations = r#"{"mutations": [
            {"key": "wet", "name": "Wet", "multiplier": 1.2, "trigger": "rain",
             "stackable": true, "data_source": "wiki",
             "last_verified_at": "2026-07-20", "confidence": "A"},
            {"key": "golden", "name": "Golden", "multiplier": 2.0, "trigger": "rare roll",
             "stackable": false, "group": "finish", "data_source": "wiki",
             "last_verified_at": "2026-07-20", "confidence": "B"}
        ]}"#;

        let codes = r#"{"codes": [
            {"code": "HARVEST2026", "reward": "500 coins", "status": "active",
             "last_verified_at": "2026-08-01", "verified_by": "mod team"}
        ]}"#;

        for (name, content) in [
            ("plants.json", plants),
            ("mutations.json", mutations),
            ("codes.json", codes),
        ] {
            let mut f = std::fs::File::create(dir.path().join(name)).unwrap();
            f.write_all(content.as_bytes()).unwrap();
        }

        dir
    }

    #[test]
    fn test_load_dedups_last_occurrence_wins() {
        let dir = write_data_dir();
        let catalog = Catalog::load(dir.path()).unwrap();

        assert_eq!(catalog.plants.len(), 2);
        // First position kept, last record's data kept
        assert_eq!(catalog.plants[0].slug, "sunberry");
        assert_eq!(catalog.plants[0].cost, 110.0);
        assert_eq!(catalog.plants[1].slug, "moonvine");
    }

    #[test]
    fn test_find_plant_by_slug_or_name() {
        let dir = write_data_dir();
        let catalog = Catalog::load(dir.path()).unwrap();

        assert!(catalog.find_plant("MOONVINE").is_some());
        assert!(catalog.find_plant("Sunberry (revised)").is_some());
        assert!(catalog.find_plant("nettle").is_none());
    }

    #[test]
    fn test_mutations_by_keys_dedup_and_missing() {
        let dir = write_data_dir();
        let catalog = Catalog::load(dir.path()).unwrap();

        let resolved = catalog
            .mutations_by_keys(&["wet".to_string(), "WET".to_string(), "golden".to_string()])
            .unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].key, "wet");

        let missing = catalog.mutations_by_keys(&["frosted".to_string()]);
        assert!(matches!(missing, Err(GardenError::MutationNotFound(_))));
    }
}
