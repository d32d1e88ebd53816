//! The JSON input file read by the harness.
//!
//! One file describes one generation pass: the snapshot, the sync batch,
//! which realms to inspect, and the contents of every carrier's chest.
//! Realm resource lists and positions may be given explicitly or derived
//! from the snapshot's realm and position tables via `realms`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use realms_notifications::{
    RealmPosition, RealmResources, ResolvedInventory, ResourceResolver, WorldSnapshot,
    realms_positions, realms_resources,
};
use realms_types::{EntityId, UpdatedEntity};

use crate::error::EngineError;

/// One generation pass, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineInput {
    /// World state to scan.
    #[serde(default)]
    pub snapshot: WorldSnapshot,

    /// Entities touched by the sync batch.
    #[serde(default)]
    pub updates: Vec<UpdatedEntity>,

    /// Realm entities owned by the player. Used to derive resource lists
    /// and positions when those are not given explicitly.
    #[serde(default)]
    pub realms: Vec<EntityId>,

    /// Hyperstructure level applied to derived resource lists.
    #[serde(default)]
    pub hyperstructure_level: Option<u32>,

    /// Explicit per-realm resource lists.
    #[serde(default)]
    pub realm_resources: Option<Vec<RealmResources>>,

    /// Explicit realm positions.
    #[serde(default)]
    pub realm_positions: Option<Vec<RealmPosition>>,

    /// Chain time in seconds. Defaults to the wall clock.
    #[serde(default)]
    pub reference_time: Option<u64>,

    /// Chest contents per carrier entity.
    #[serde(default)]
    pub chests: ChestContents,
}

impl EngineInput {
    /// Read and parse an input file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if the file cannot be read and
    /// [`EngineError::Json`] if it is not a valid input document.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Realm resource lists: explicit ones, or derived from `realms`.
    pub fn resolved_realm_resources(&self) -> Vec<RealmResources> {
        self.realm_resources.clone().unwrap_or_else(|| {
            realms_resources(&self.snapshot, &self.realms, self.hyperstructure_level)
        })
    }

    /// Realm positions: explicit ones, or derived from `realms`.
    pub fn resolved_realm_positions(&self) -> Vec<RealmPosition> {
        self.realm_positions
            .clone()
            .unwrap_or_else(|| realms_positions(&self.snapshot, &self.realms))
    }
}

/// Map-backed [`ResourceResolver`]. Unknown carriers have empty chests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChestContents(BTreeMap<EntityId, ResolvedInventory>);

impl ResourceResolver for ChestContents {
    fn resolve(&self, entity: EntityId) -> ResolvedInventory {
        self.0.get(&entity).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use realms_types::{Position, RealmId, ResourceId};

    use super::*;

    const INPUT: &str = r#"{
        "snapshot": {
            "realm": {
                "100": { "realm_id": 7, "resource_types_packed": 3, "resource_types_count": 1 }
            },
            "position": { "100": { "x": 4, "y": 6 } }
        },
        "realms": [100],
        "hyperstructure_level": 1,
        "chests": {
            "9": { "resources": [ { "resourceId": 3, "amount": 50 } ], "indices": [0] }
        }
    }"#;

    fn parsed() -> EngineInput {
        serde_json::from_str(INPUT).unwrap_or_default()
    }

    #[test]
    fn realm_lists_are_derived_from_the_snapshot() {
        let input = parsed();
        let resources = input.resolved_realm_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(
            resources.first().map(|r| r.resource_ids.clone()),
            Some(vec![ResourceId::WHEAT, ResourceId::FISH, ResourceId(3)])
        );
        assert_eq!(
            input.resolved_realm_positions(),
            vec![RealmPosition {
                realm_id: RealmId(7),
                position: Position::new(4, 6),
            }]
        );
    }

    #[test]
    fn explicit_realm_lists_win() {
        let mut input = parsed();
        input.realm_positions = Some(Vec::new());
        assert!(input.resolved_realm_positions().is_empty());
    }

    #[test]
    fn chests_resolve_by_entity() {
        let input = parsed();
        assert_eq!(input.chests.resolve(EntityId(9)).indices, vec![0]);
        assert_eq!(input.chests.resolve(EntityId(10)), ResolvedInventory::default());
        assert_eq!(input.reference_time, None);
    }
}
