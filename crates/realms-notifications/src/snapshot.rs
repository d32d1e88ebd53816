//! Read-only world snapshot handed in by the sync layer.
//!
//! One [`WorldSnapshot`] is an immutable view for the length of a generation
//! pass. Tables are `BTreeMap`s so every scan visits rows in the same order
//! and output is deterministic.
//!
//! Composite-keyed tables (trade status, labor, resources) use
//! [`EntityKey`]; per-entity tables are keyed directly by [`EntityId`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use realms_types::{
    ArrivalTimeRecord, CaravanMembersRecord, EntityId, EntityKey, InventoryRecord, LaborRecord,
    Position, RealmId, RealmRecord, ResourceId, ResourceRecord, TradeStatusRecord,
};

/// Snapshot of every table the generator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Trade status keyed by trade id.
    #[serde(default)]
    pub trade_status: BTreeMap<EntityKey, TradeStatusRecord>,

    /// Labor accounts keyed by `(realm entity, resource)`.
    #[serde(default)]
    pub labor: BTreeMap<EntityKey, LaborRecord>,

    /// Harvested stock keyed by `(entity, resource)`. No detector reads it;
    /// it is mirrored for the presentation layer's balance display.
    #[serde(default)]
    pub resources: BTreeMap<EntityKey, ResourceRecord>,

    /// Inventory headers of carrier entities.
    #[serde(default)]
    pub inventory: BTreeMap<EntityId, InventoryRecord>,

    /// Map positions of entities.
    #[serde(default)]
    pub position: BTreeMap<EntityId, Position>,

    /// Scheduled arrivals of travelling entities.
    #[serde(default)]
    pub arrival_time: BTreeMap<EntityId, ArrivalTimeRecord>,

    /// Caravan headers; present only on caravans.
    #[serde(default)]
    pub caravan_members: BTreeMap<EntityId, CaravanMembersRecord>,

    /// Realm rows keyed by realm entity.
    #[serde(default)]
    pub realm: BTreeMap<EntityId, RealmRecord>,
}

impl WorldSnapshot {
    /// Create an empty snapshot.
    pub const fn new() -> Self {
        Self {
            trade_status: BTreeMap::new(),
            labor: BTreeMap::new(),
            resources: BTreeMap::new(),
            inventory: BTreeMap::new(),
            position: BTreeMap::new(),
            arrival_time: BTreeMap::new(),
            caravan_members: BTreeMap::new(),
            realm: BTreeMap::new(),
        }
    }

    /// Trade status row for a trade key.
    pub fn trade_status(&self, key: &EntityKey) -> Option<&TradeStatusRecord> {
        self.trade_status.get(key)
    }

    /// Labor account of a realm for one resource.
    pub fn labor(&self, realm_entity: EntityId, resource: ResourceId) -> Option<&LaborRecord> {
        self.labor
            .get(&EntityKey::realm_resource(realm_entity, resource))
    }

    /// Harvested balance of a resource held by an entity, zero if absent.
    ///
    /// Used by the presentation layer next to harvest notifications.
    pub fn resource_balance(&self, entity: EntityId, resource: ResourceId) -> u64 {
        self.resources
            .get(&EntityKey::realm_resource(entity, resource))
            .map_or(0, |record| record.balance)
    }

    /// Entities at `position` carrying exactly one inventory slot-set.
    pub fn carriers_at(&self, position: Position) -> impl Iterator<Item = EntityId> + '_ {
        self.inventory
            .iter()
            .filter(|(_, inventory)| inventory.items_count == 1)
            .map(|(entity, _)| *entity)
            .filter(move |entity| self.position.get(entity) == Some(&position))
    }

    /// Entity of the realm with token id `realm_id`, if its row is present.
    pub fn realm_entity(&self, realm_id: RealmId) -> Option<EntityId> {
        self.realm
            .iter()
            .find(|(_, realm)| realm.realm_id == realm_id)
            .map(|(entity, _)| *entity)
    }

    /// Whether `entity` is a caravan.
    pub fn is_caravan(&self, entity: EntityId) -> bool {
        self.caravan_members.contains_key(&entity)
    }
}
