//! Arrived-chest notifications.
//!
//! A carrier standing on a realm's tile with a single inventory slot-set and
//! an arrival time at or before the reference time has goods waiting to be
//! unloaded. Caravans are told apart from raiders by their members header.

use tracing::{debug, trace};

use realms_types::{CarrierType, EmptyChestData, NotificationEvent};

use crate::capability::ResourceResolver;
use crate::realm::RealmPosition;
use crate::snapshot::WorldSnapshot;

/// Emit an empty-chest notification for every carrier that has arrived at
/// one of `positions` by `reference_time`.
///
/// Carriers without an arrival row, or with an arrival still in the future,
/// are skipped. The resolver is only asked about carriers that arrived.
pub fn detect_arrivals<R: ResourceResolver>(
    resolver: &R,
    snapshot: &WorldSnapshot,
    positions: &[RealmPosition],
    reference_time: u64,
) -> Vec<NotificationEvent> {
    let mut events = Vec::new();
    let mut candidates: usize = 0;

    for realm in positions {
        let realm_entity_id = snapshot.realm_entity(realm.realm_id);

        for entity_id in snapshot.carriers_at(realm.position) {
            candidates = candidates.saturating_add(1);
            let arrived = snapshot
                .arrival_time
                .get(&entity_id)
                .is_some_and(|arrival| arrival.has_arrived(reference_time));
            if !arrived {
                trace!(entity = %entity_id, "carrier not arrived");
                continue;
            }

            let carrier_type = if snapshot.is_caravan(entity_id) {
                CarrierType::Caravan
            } else {
                CarrierType::Raiders
            };
            let inventory = resolver.resolve(entity_id);

            events.push(NotificationEvent::empty_chest(EmptyChestData {
                destination_realm_id: realm.realm_id,
                carrier_type,
                realm_entity_id,
                entity_id,
                resources: inventory.resources,
                indices: inventory.indices,
            }));
        }
    }

    debug!(candidates, emitted = events.len(), "arrival detection done");
    events
}
