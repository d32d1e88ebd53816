//! Notification events handed to the presentation layer, and the entity
//! update descriptors they are derived from.
//!
//! Events serialize to the camelCase shape the browser client renders.
//! Two events are duplicates exactly when every field compares equal, which
//! is the same as comparing their serialized forms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CarrierType, EventType};
use crate::ids::{EntityId, RealmId, ResourceId};
use crate::records::ResourceAmount;

// ---------------------------------------------------------------------------
// Entity updates
// ---------------------------------------------------------------------------

/// One entity touched by a sync batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct UpdatedEntity {
    /// Raw key strings of the entity, as delivered by the indexer.
    pub entity_keys: Vec<String>,
    /// Names of the models (tables) touched for this entity.
    pub model_names: Vec<String>,
}

impl UpdatedEntity {
    /// Whether the update touched the model called `model`.
    pub fn touches(&self, model: &str) -> bool {
        self.model_names.iter().any(|name| name == model)
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Payload of a [`EventType::Harvest`] notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HarvestData {
    /// Harvestable amount scaled down by the resource precision.
    #[ts(as = "String")]
    pub harvest_amount: Decimal,
}

/// Payload of a [`EventType::EmptyChest`] notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EmptyChestData {
    /// Realm the carrier arrived at.
    pub destination_realm_id: RealmId,
    /// Whether the goods came by caravan or with raiders.
    pub carrier_type: CarrierType,
    /// Entity of the destination realm, when its realm row is in the snapshot.
    pub realm_entity_id: Option<EntityId>,
    /// The carrier entity.
    pub entity_id: EntityId,
    /// Resources waiting in the carrier's chest.
    pub resources: Vec<ResourceAmount>,
    /// Inventory slot indices holding those resources.
    pub indices: Vec<u64>,
}

/// Structured payload attached to some notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum NotificationData {
    /// Harvest readiness details.
    Harvest(HarvestData),
    /// Arrived chest details.
    EmptyChest(EmptyChestData),
}

// ---------------------------------------------------------------------------
// NotificationEvent
// ---------------------------------------------------------------------------

/// A classified domain event for the UI. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct NotificationEvent {
    /// What happened.
    pub event_type: EventType,
    /// Keys identifying the subject, used by the UI for dismissal.
    pub keys: Vec<String>,
    /// Optional structured payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
}

impl NotificationEvent {
    /// A trade notification carrying the update's raw keys verbatim.
    pub const fn trade(event_type: EventType, keys: Vec<String>) -> Self {
        Self {
            event_type,
            keys,
            data: None,
        }
    }

    /// A harvest-ready notification keyed by realm entity and resource.
    pub fn harvest(realm_entity: EntityId, resource: ResourceId, harvest_amount: Decimal) -> Self {
        Self {
            event_type: EventType::Harvest,
            keys: vec![realm_entity.to_string(), resource.to_string()],
            data: Some(NotificationData::Harvest(HarvestData { harvest_amount })),
        }
    }

    /// An arrived-chest notification keyed by the carrier entity.
    pub fn empty_chest(data: EmptyChestData) -> Self {
        Self {
            event_type: EventType::EmptyChest,
            keys: vec![data.entity_id.to_string()],
            data: Some(NotificationData::EmptyChest(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn harvest_event_shape() {
        let event = NotificationEvent::harvest(EntityId(12), ResourceId(3), dec!(0.055));
        let json = serde_json::to_value(&event).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "eventType": "Harvest",
                "keys": ["12", "3"],
                "data": { "harvestAmount": "0.055" }
            }))
        );
    }

    #[test]
    fn trade_event_omits_data() {
        let event = NotificationEvent::trade(EventType::MakeOffer, vec!["0x5".to_owned()]);
        let json = serde_json::to_value(&event).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({ "eventType": "MakeOffer", "keys": ["0x5"] }))
        );
    }

    #[test]
    fn empty_chest_round_trips_through_untagged_payload() {
        let event = NotificationEvent::empty_chest(EmptyChestData {
            destination_realm_id: RealmId(8),
            carrier_type: CarrierType::Caravan,
            realm_entity_id: None,
            entity_id: EntityId(99),
            resources: vec![ResourceAmount {
                resource_id: ResourceId(2),
                amount: 1000,
            }],
            indices: vec![0],
        });
        assert_eq!(event.keys, vec!["99".to_owned()]);

        let json = serde_json::to_string(&event).unwrap_or_default();
        let back: Result<NotificationEvent, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(event));
    }

    #[test]
    fn update_touches_model_by_exact_name() {
        let update = UpdatedEntity {
            entity_keys: vec!["0x1".to_owned()],
            model_names: vec!["Trade".to_owned(), "Status".to_owned()],
        };
        assert!(update.touches("Trade"));
        assert!(!update.touches("Trad"));
    }
}
