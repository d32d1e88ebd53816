//! Snapshot-diff notification generator for the Realms client.
//!
//! Reads an immutable [`WorldSnapshot`] plus a reference time and emits the
//! notifications the UI shows: trade status changes, resources ready to
//! harvest, and carriers waiting to be unloaded.
//!
//! # Modules
//!
//! - [`snapshot`] -- Read-only world tables with deterministic iteration
//! - [`capability`] -- [`BonusSource`] and [`ResourceResolver`] capabilities
//! - [`realm`] -- Per-realm resource lists and positions
//! - [`trade`] -- Trade status detection and consecutive dedup
//! - [`harvest`] -- Harvest readiness detection
//! - [`arrival`] -- Arrived-chest detection
//! - [`generator`] -- [`NotificationGenerator`] running all three detectors
//! - [`error`] -- Error types for a generation pass

pub mod arrival;
pub mod capability;
pub mod error;
pub mod generator;
pub mod harvest;
pub mod realm;
pub mod snapshot;
pub mod trade;

pub use arrival::detect_arrivals;
pub use capability::{
    BonusSource, LevelBonus, LevelBonusTable, LevelBonusTables, ResolvedInventory,
    ResourceResolver,
};
pub use error::NotificationError;
pub use generator::{GenerationInput, NotificationGenerator};
pub use harvest::detect_harvests;
pub use realm::{
    MAX_PACKED_RESOURCES, RealmPosition, RealmResources, realm_resource_ids, realms_positions,
    realms_resources,
};
pub use snapshot::WorldSnapshot;
pub use trade::{TRADE_MODEL, detect_trades, remove_consecutive_duplicates};
