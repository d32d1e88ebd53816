//! Record types mirrored from the on-chain world tables.
//!
//! The engine only ever reads these. Every row is owned and mutated by the
//! chain; snapshots of them are handed to the engine by the sync layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{RealmId, ResourceId};

// ---------------------------------------------------------------------------
// Production
// ---------------------------------------------------------------------------

/// Accrued labor for one `(realm entity, resource)` pair.
///
/// `balance` is a timestamp: labor is available until the chain clock
/// reaches it. It only grows between harvests; decay shows up through
/// `multiplier`, never through a shrinking balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LaborRecord {
    /// Timestamp until which labor has been purchased.
    pub balance: u64,
    /// Timestamp of the last harvest, 0 if never harvested.
    pub last_harvest: u64,
    /// Number of productive buildings behind this account.
    pub multiplier: u64,
}

/// Harvested, spendable stock of one resource held by an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceRecord {
    /// Amount held, in precision-scaled units.
    pub balance: u64,
}

// ---------------------------------------------------------------------------
// Trade
// ---------------------------------------------------------------------------

/// Raw trade status row. Decode with [`TradeStatus::from_raw`].
///
/// [`TradeStatus::from_raw`]: crate::enums::TradeStatus::from_raw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TradeStatusRecord {
    /// Raw status value: 0 proposed, 1 accepted, 2 cancelled.
    pub value: u8,
}

// ---------------------------------------------------------------------------
// Movement and inventory
// ---------------------------------------------------------------------------

/// A hex coordinate on the world map.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Column.
    pub x: u64,
    /// Row.
    pub y: u64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

/// Inventory header of a carrier entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InventoryRecord {
    /// Number of item slot-sets the carrier holds.
    pub items_count: u64,
}

/// Scheduled arrival of a travelling entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArrivalTimeRecord {
    /// Arrival timestamp. Zero means no arrival is scheduled.
    pub arrives_at: u64,
}

impl ArrivalTimeRecord {
    /// Whether the entity has arrived by `reference_time` (inclusive).
    pub const fn has_arrived(self, reference_time: u64) -> bool {
        self.arrives_at != 0 && self.arrives_at <= reference_time
    }
}

/// Membership header present only on caravan entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CaravanMembersRecord {
    /// Key under which the members are stored.
    pub key: u64,
    /// Number of transport units in the caravan.
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Realm
// ---------------------------------------------------------------------------

/// Realm row attached to a realm entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RealmRecord {
    /// Token id of the realm. Zero means the entity is not a minted realm.
    pub realm_id: RealmId,
    /// Resource ids the realm can produce, packed eight bits per entry with
    /// the first resource in the lowest byte.
    pub resource_types_packed: u128,
    /// Number of entries in `resource_types_packed`.
    pub resource_types_count: u8,
    /// Current realm level.
    #[serde(default)]
    pub level: u32,
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// A quantity of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ResourceAmount {
    /// Resource type.
    pub resource_id: ResourceId,
    /// Quantity in precision-scaled units.
    pub amount: u64,
}
