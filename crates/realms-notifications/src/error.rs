//! Error types for the `realms-notifications` crate.
//!
//! A generation pass either returns every notification for the snapshot or
//! one of these errors; there are no partial results. Missing records are
//! not errors and never surface here.

use realms_production::ProductionError;
use realms_types::KeyError;

/// Errors that abort a notification generation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    /// An entity update carried keys that do not decode into an entity key.
    /// This points at an encoding bug upstream.
    #[error("malformed entity keys {keys:?}: {source}")]
    MalformedKey {
        /// The raw keys as delivered.
        keys: Vec<String>,
        /// Why decoding failed.
        source: KeyError,
    },

    /// Production math rejected its inputs.
    #[error("production error: {source}")]
    Production {
        /// The underlying production error.
        #[from]
        source: ProductionError,
    },
}
