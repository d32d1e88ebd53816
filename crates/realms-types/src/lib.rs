//! Shared type definitions for the Realms production and notification engine.
//!
//! Every crate in the workspace speaks in these types. Record and event
//! types flow to `TypeScript` via `ts-rs` for the browser client.
//!
//! # Modules
//!
//! - [`ids`] -- Newtype wrappers for entity, realm, and resource identifiers
//! - [`key`] -- Composite [`EntityKey`] with a canonical fixed-width encoding
//! - [`enums`] -- Trade status, event classification, carrier and resource class
//! - [`records`] -- Read-only mirrors of the on-chain world tables
//! - [`notification`] -- Notification events and entity update descriptors

pub mod enums;
pub mod ids;
pub mod key;
pub mod notification;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use enums::{CarrierType, EventType, ResourceClass, TradeStatus};
pub use ids::{EntityId, RealmId, ResourceId};
pub use key::{EntityKey, KeyError};
pub use notification::{
    EmptyChestData, HarvestData, NotificationData, NotificationEvent, UpdatedEntity,
};
pub use records::{
    ArrivalTimeRecord, CaravanMembersRecord, InventoryRecord, LaborRecord, Position, RealmRecord,
    ResourceAmount, ResourceRecord, TradeStatusRecord,
};

#[cfg(test)]
mod tests {
    //! Binding generation for the browser client.

    #[test]
    fn export_bindings() {
        // ts-rs writes bindings for every `#[ts(export)]` type into the
        // `bindings/` directory relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EntityId::export_all();
        let _ = crate::ids::RealmId::export_all();
        let _ = crate::ids::ResourceId::export_all();

        // Enums
        let _ = crate::enums::TradeStatus::export_all();
        let _ = crate::enums::EventType::export_all();
        let _ = crate::enums::CarrierType::export_all();
        let _ = crate::enums::ResourceClass::export_all();

        // Records
        let _ = crate::records::LaborRecord::export_all();
        let _ = crate::records::ResourceRecord::export_all();
        let _ = crate::records::TradeStatusRecord::export_all();
        let _ = crate::records::Position::export_all();
        let _ = crate::records::InventoryRecord::export_all();
        let _ = crate::records::ArrivalTimeRecord::export_all();
        let _ = crate::records::CaravanMembersRecord::export_all();
        let _ = crate::records::RealmRecord::export_all();
        let _ = crate::records::ResourceAmount::export_all();

        // Notifications
        let _ = crate::notification::UpdatedEntity::export_all();
        let _ = crate::notification::HarvestData::export_all();
        let _ = crate::notification::EmptyChestData::export_all();
        let _ = crate::notification::NotificationData::export_all();
        let _ = crate::notification::NotificationEvent::export_all();
    }
}
