//! Trade status notifications.
//!
//! Every entity update that touched the trade model is looked up in the
//! trade status table and classified by the status it now holds. Bursts of
//! identical updates within one batch collapse through
//! [`remove_consecutive_duplicates`].

use tracing::{debug, trace, warn};

use realms_types::{EntityKey, NotificationEvent, TradeStatus, UpdatedEntity};

use crate::error::NotificationError;
use crate::snapshot::WorldSnapshot;

/// Model name marking an update as a trade update.
pub const TRADE_MODEL: &str = "Trade";

/// Classify every trade update in `updates` by its current status.
///
/// Updates without a status row, or with an unknown status value, produce
/// nothing. The result has consecutive duplicates removed.
///
/// # Errors
///
/// Returns [`NotificationError::MalformedKey`] if a trade update's keys do
/// not decode. The whole batch is rejected.
pub fn detect_trades(
    snapshot: &WorldSnapshot,
    updates: &[UpdatedEntity],
) -> Result<Vec<NotificationEvent>, NotificationError> {
    let mut events = Vec::new();
    let mut candidates: usize = 0;

    for update in updates.iter().filter(|update| update.touches(TRADE_MODEL)) {
        candidates = candidates.saturating_add(1);
        let key = EntityKey::from_raw_keys(&update.entity_keys).map_err(|source| {
            NotificationError::MalformedKey {
                keys: update.entity_keys.clone(),
                source,
            }
        })?;

        let Some(record) = snapshot.trade_status(&key) else {
            trace!(%key, "trade update without status row");
            continue;
        };
        let Some(status) = TradeStatus::from_raw(record.value) else {
            warn!(%key, value = record.value, "unknown trade status");
            continue;
        };

        events.push(NotificationEvent::trade(
            status.event_type(),
            update.entity_keys.clone(),
        ));
    }

    let events = remove_consecutive_duplicates(events);
    debug!(candidates, emitted = events.len(), "trade detection done");
    Ok(events)
}

/// Drop every event equal to the one immediately before it.
///
/// Only adjacent repeats are removed; an event that reappears later in the
/// stream is kept.
pub fn remove_consecutive_duplicates(mut events: Vec<NotificationEvent>) -> Vec<NotificationEvent> {
    events.dedup();
    events
}
