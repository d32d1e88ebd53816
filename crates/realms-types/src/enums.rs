//! Enumeration types for records and notifications.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ResourceId;

// ---------------------------------------------------------------------------
// Trade status
// ---------------------------------------------------------------------------

/// Lifecycle of a trade offer as stored in the trade status table.
///
/// A trade moves monotonically through these values and never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TradeStatus {
    /// The offer is open.
    Proposed,
    /// The counterparty accepted the offer.
    Accepted,
    /// The maker withdrew the offer.
    Cancelled,
}

impl TradeStatus {
    /// Decode the raw on-chain status value.
    ///
    /// Returns `None` for values outside the known range.
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Proposed),
            1 => Some(Self::Accepted),
            2 => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The notification type announcing a trade in this status.
    pub const fn event_type(self) -> EventType {
        match self {
            Self::Proposed => EventType::MakeOffer,
            Self::Accepted => EventType::AcceptOffer,
            Self::Cancelled => EventType::CancelOffer,
        }
    }
}

// ---------------------------------------------------------------------------
// Notification classification
// ---------------------------------------------------------------------------

/// Classification of a generated notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventType {
    /// A trade offer was created.
    MakeOffer,
    /// A trade offer was accepted.
    AcceptOffer,
    /// A trade offer was cancelled.
    CancelOffer,
    /// Labor has produced a harvestable amount.
    Harvest,
    /// A carrier arrived at a realm with goods waiting to be unloaded.
    EmptyChest,
}

/// How goods arriving at a realm were carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CarrierType {
    /// A caravan of donkeys or other transport units.
    Caravan,
    /// A raiding party returning with loot.
    Raiders,
}

// ---------------------------------------------------------------------------
// Resource class
// ---------------------------------------------------------------------------

/// Production class of a resource.
///
/// Selects both the base yield per labor cycle and which column of a level
/// bonus table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResourceClass {
    /// Wheat and fish.
    Food,
    /// Every other resource.
    Standard,
}

impl ResourceClass {
    /// Classify a resource id against the configured food ids.
    pub fn of(resource: ResourceId, food_ids: &[ResourceId]) -> Self {
        if food_ids.contains(&resource) {
            Self::Food
        } else {
            Self::Standard
        }
    }
}
