//! Harvest readiness notifications.
//!
//! For each realm and each resource it produces, the labor account is run
//! through the production clock. A resource is ready when the harvestable
//! amount is strictly positive, even if it truncates to zero for display.

use tracing::{debug, trace};

use rust_decimal::Decimal;

use realms_production::{BonusPercents, ProductionClock};
use realms_types::NotificationEvent;

use crate::capability::BonusSource;
use crate::error::NotificationError;
use crate::realm::RealmResources;
use crate::snapshot::WorldSnapshot;

/// Emit a harvest notification for every realm resource with a harvestable
/// amount at `reference_time`.
///
/// Resources without a labor account are skipped. A realm without a
/// hyperstructure level never produces harvest notifications.
///
/// # Errors
///
/// Returns [`NotificationError::Production`] if the production math fails.
pub fn detect_harvests<B: BonusSource>(
    clock: &ProductionClock,
    bonuses: &B,
    snapshot: &WorldSnapshot,
    realms: &[RealmResources],
    reference_time: u64,
) -> Result<Vec<NotificationEvent>, NotificationError> {
    let mut events = Vec::new();
    let mut candidates: usize = 0;

    for realm in realms {
        for &resource in &realm.resource_ids {
            let Some(account) = snapshot.labor(realm.realm_entity_id, resource) else {
                trace!(realm = %realm.realm_entity_id, %resource, "no labor account");
                continue;
            };
            candidates = candidates.saturating_add(1);

            let class = clock.classify(resource);
            let level = bonuses.realm_level_bonus(realm.realm_level, class);
            let secondary = realm
                .hyperstructure_level
                .map(|level| bonuses.hyperstructure_level_bonus(level, class));

            let amount = clock.next_harvest_amount(
                account,
                class,
                reference_time,
                BonusPercents { level, secondary },
            )?;
            if amount <= Decimal::ZERO {
                continue;
            }

            events.push(NotificationEvent::harvest(
                realm.realm_entity_id,
                resource,
                clock.display_amount(amount)?,
            ));
        }
    }

    debug!(candidates, emitted = events.len(), "harvest detection done");
    Ok(events)
}
