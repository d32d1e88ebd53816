//! Realm-level inputs to the harvest and arrival detectors.
//!
//! Callers usually know only which realm entities the player owns. The
//! helpers here turn those into the per-realm resource lists and positions
//! the generator consumes, reading the realm and position tables of a
//! [`WorldSnapshot`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use realms_types::{EntityId, Position, RealmId, RealmRecord, ResourceId};

use crate::snapshot::WorldSnapshot;

/// Maximum number of resource types packed into one realm row.
pub const MAX_PACKED_RESOURCES: u8 = 16;

const PACKED_BITS: u32 = 8;

/// Resources a realm produces, with the levels that drive its bonuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmResources {
    /// Entity of the realm.
    pub realm_entity_id: EntityId,
    /// Resources with a labor account to inspect, in emission order.
    pub resource_ids: Vec<ResourceId>,
    /// Realm level.
    #[serde(default)]
    pub realm_level: u32,
    /// Level of the hyperstructure the realm belongs to, if any.
    #[serde(default)]
    pub hyperstructure_level: Option<u32>,
}

/// Where a realm sits on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmPosition {
    /// Token id of the realm.
    pub realm_id: RealmId,
    /// Map coordinates of the realm.
    pub position: Position,
}

/// Resource ids a realm can produce.
///
/// Wheat and fish come first for every realm, followed by the ids unpacked
/// from the low byte upwards of `resource_types_packed`. The count is capped
/// at [`MAX_PACKED_RESOURCES`].
pub fn realm_resource_ids(realm: &RealmRecord) -> Vec<ResourceId> {
    let count = realm.resource_types_count.min(MAX_PACKED_RESOURCES);
    let unpacked = (0..u32::from(count)).filter_map(|slot| {
        let shift = slot.checked_mul(PACKED_BITS)?;
        let byte = realm.resource_types_packed.checked_shr(shift)? & 0xff;
        u8::try_from(byte).ok().map(ResourceId)
    });

    [ResourceId::WHEAT, ResourceId::FISH]
        .into_iter()
        .chain(unpacked)
        .collect()
}

/// Build [`RealmResources`] for each listed realm entity.
///
/// Entities without a realm row, or whose realm id is 0, are skipped.
pub fn realms_resources(
    snapshot: &WorldSnapshot,
    realms: &[EntityId],
    hyperstructure_level: Option<u32>,
) -> Vec<RealmResources> {
    realms
        .iter()
        .filter_map(|&entity| {
            let Some(realm) = snapshot.realm.get(&entity) else {
                trace!(%entity, "no realm row, skipping");
                return None;
            };
            if realm.realm_id.into_inner() == 0 {
                return None;
            }
            Some(RealmResources {
                realm_entity_id: entity,
                resource_ids: realm_resource_ids(realm),
                realm_level: realm.level,
                hyperstructure_level,
            })
        })
        .collect()
}

/// Build [`RealmPosition`] for each listed realm entity.
///
/// Entities missing either a realm row or a position are skipped.
pub fn realms_positions(snapshot: &WorldSnapshot, realms: &[EntityId]) -> Vec<RealmPosition> {
    realms
        .iter()
        .filter_map(|entity| {
            let realm = snapshot.realm.get(entity)?;
            let position = snapshot.position.get(entity)?;
            Some(RealmPosition {
                realm_id: realm.realm_id,
                position: *position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn realm(realm_id: u64, packed: u128, count: u8) -> RealmRecord {
        RealmRecord {
            realm_id: RealmId(realm_id),
            resource_types_packed: packed,
            resource_types_count: count,
            level: 2,
        }
    }

    #[test]
    fn food_comes_first_then_packed_bytes() {
        // bytes low to high: 3, 1, 11
        let ids = realm_resource_ids(&realm(1, 0x0b_01_03, 3));
        assert_eq!(
            ids,
            vec![
                ResourceId::WHEAT,
                ResourceId::FISH,
                ResourceId(3),
                ResourceId(1),
                ResourceId(11),
            ]
        );
    }

    #[test]
    fn packed_count_is_capped() {
        let ids = realm_resource_ids(&realm(1, u128::MAX, 40));
        assert_eq!(ids.len(), 2 + usize::from(MAX_PACKED_RESOURCES));
        assert!(ids.iter().skip(2).all(|id| *id == ResourceId(0xff)));
    }

    #[test]
    fn realms_without_token_id_are_skipped() {
        let mut snapshot = WorldSnapshot::new();
        snapshot.realm.insert(EntityId(1), realm(0, 0x01, 1));
        snapshot.realm.insert(EntityId(2), realm(9, 0x02, 1));

        let resources =
            realms_resources(&snapshot, &[EntityId(1), EntityId(2), EntityId(3)], Some(1));
        assert_eq!(resources.len(), 1);
        let first = resources.first();
        assert_eq!(first.map(|r| r.realm_entity_id), Some(EntityId(2)));
        assert_eq!(first.map(|r| r.realm_level), Some(2));
        assert_eq!(first.and_then(|r| r.hyperstructure_level), Some(1));
    }

    #[test]
    fn positions_require_realm_and_position_rows() {
        let mut snapshot = WorldSnapshot::new();
        snapshot.realm.insert(EntityId(1), realm(7, 0, 0));
        snapshot.realm.insert(EntityId(2), realm(8, 0, 0));
        snapshot.position.insert(EntityId(1), Position::new(3, 4));

        let positions = realms_positions(&snapshot, &[EntityId(1), EntityId(2)]);
        assert_eq!(
            positions,
            vec![RealmPosition {
                realm_id: RealmId(7),
                position: Position::new(3, 4),
            }]
        );
    }
}
