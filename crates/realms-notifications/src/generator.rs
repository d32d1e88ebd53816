//! The notification generator.
//!
//! [`NotificationGenerator`] binds the production clock and the two
//! capabilities once, then turns any number of [`GenerationInput`]s into
//! event streams. It holds no state between calls: the same input always
//! yields the same events, and a reference time earlier than a previous
//! call's is just another input.
//!
//! # Order
//!
//! One pass runs the detectors in a fixed order and concatenates their
//! output: trades first, then harvests, then arrivals. Within each detector
//! events follow input order (updates, realms, positions) and snapshot
//! table order.

use tracing::debug;

use realms_production::ProductionClock;
use realms_types::{NotificationEvent, UpdatedEntity};

use crate::arrival::detect_arrivals;
use crate::capability::{BonusSource, ResourceResolver};
use crate::error::NotificationError;
use crate::harvest::detect_harvests;
use crate::realm::{RealmPosition, RealmResources};
use crate::snapshot::WorldSnapshot;
use crate::trade::detect_trades;

/// Everything one generation pass reads.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    /// World state at `reference_time`.
    pub snapshot: &'a WorldSnapshot,
    /// Entities touched by the latest sync batch.
    pub updates: &'a [UpdatedEntity],
    /// Realms whose labor accounts to inspect.
    pub realm_resources: &'a [RealmResources],
    /// Realm tiles to scan for arrived carriers.
    pub realm_positions: &'a [RealmPosition],
    /// Current chain time in seconds.
    pub reference_time: u64,
}

/// Stateless generator of notification events from world snapshots.
#[derive(Debug, Clone)]
pub struct NotificationGenerator<B, R> {
    clock: ProductionClock,
    bonuses: B,
    resolver: R,
}

impl<B: BonusSource, R: ResourceResolver> NotificationGenerator<B, R> {
    /// Create a generator from its production clock and capabilities.
    pub const fn new(clock: ProductionClock, bonuses: B, resolver: R) -> Self {
        Self {
            clock,
            bonuses,
            resolver,
        }
    }

    /// The production clock used for harvest readiness.
    pub const fn clock(&self) -> &ProductionClock {
        &self.clock
    }

    /// Run every detector over `input`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any detector. No events are
    /// returned in that case.
    pub fn generate(
        &self,
        input: &GenerationInput<'_>,
    ) -> Result<Vec<NotificationEvent>, NotificationError> {
        let mut events = self.trade_notifications(input.snapshot, input.updates)?;
        let trades = events.len();

        let harvests = self.harvest_notifications(
            input.snapshot,
            input.realm_resources,
            input.reference_time,
        )?;
        let harvest_count = harvests.len();
        events.extend(harvests);

        let arrivals = self.arrival_notifications(
            input.snapshot,
            input.realm_positions,
            input.reference_time,
        );
        let arrival_count = arrivals.len();
        events.extend(arrivals);

        debug!(
            reference_time = input.reference_time,
            trades,
            harvests = harvest_count,
            arrivals = arrival_count,
            "notifications generated"
        );
        Ok(events)
    }

    /// Trade notifications for `updates`, consecutive duplicates removed.
    ///
    /// # Errors
    ///
    /// See [`detect_trades`].
    pub fn trade_notifications(
        &self,
        snapshot: &WorldSnapshot,
        updates: &[UpdatedEntity],
    ) -> Result<Vec<NotificationEvent>, NotificationError> {
        detect_trades(snapshot, updates)
    }

    /// Harvest-ready notifications for `realms`.
    ///
    /// # Errors
    ///
    /// See [`detect_harvests`].
    pub fn harvest_notifications(
        &self,
        snapshot: &WorldSnapshot,
        realms: &[RealmResources],
        reference_time: u64,
    ) -> Result<Vec<NotificationEvent>, NotificationError> {
        detect_harvests(&self.clock, &self.bonuses, snapshot, realms, reference_time)
    }

    /// Arrived-chest notifications for `positions`.
    pub fn arrival_notifications(
        &self,
        snapshot: &WorldSnapshot,
        positions: &[RealmPosition],
        reference_time: u64,
    ) -> Vec<NotificationEvent> {
        detect_arrivals(&self.resolver, snapshot, positions, reference_time)
    }
}

#[cfg(test)]
mod tests {
    use realms_types::{
        ArrivalTimeRecord, EntityId, EntityKey, EventType, InventoryRecord, LaborRecord,
        Position, RealmId, ResourceId, TradeStatusRecord,
    };

    use super::*;
    use crate::capability::{LevelBonusTables, ResolvedInventory};

    fn empty_chest(_: EntityId) -> ResolvedInventory {
        ResolvedInventory::default()
    }

    fn generator() -> NotificationGenerator<LevelBonusTables, fn(EntityId) -> ResolvedInventory> {
        NotificationGenerator::new(
            ProductionClock::default(),
            LevelBonusTables::default(),
            empty_chest as fn(EntityId) -> ResolvedInventory,
        )
    }

    fn world() -> WorldSnapshot {
        let mut snapshot = WorldSnapshot::new();
        snapshot
            .trade_status
            .insert(EntityKey::single(7_u64), TradeStatusRecord { value: 1 });
        snapshot.labor.insert(
            EntityKey::realm_resource(EntityId(1), ResourceId(2)),
            LaborRecord {
                balance: 10_000,
                last_harvest: 1000,
                multiplier: 1,
            },
        );
        snapshot
            .inventory
            .insert(EntityId(40), InventoryRecord { items_count: 1 });
        snapshot.position.insert(EntityId(40), Position::new(1, 1));
        snapshot
            .arrival_time
            .insert(EntityId(40), ArrivalTimeRecord { arrives_at: 10 });
        snapshot
    }

    #[test]
    fn detectors_run_in_fixed_order() {
        let snapshot = world();
        let updates = [UpdatedEntity {
            entity_keys: vec!["7".to_owned()],
            model_names: vec!["Trade".to_owned()],
        }];
        let realms = [RealmResources {
            realm_entity_id: EntityId(1),
            resource_ids: vec![ResourceId(2)],
            realm_level: 0,
            hyperstructure_level: Some(0),
        }];
        let positions = [RealmPosition {
            realm_id: RealmId(5),
            position: Position::new(1, 1),
        }];
        let input = GenerationInput {
            snapshot: &snapshot,
            updates: &updates,
            realm_resources: &realms,
            realm_positions: &positions,
            reference_time: 5000,
        };

        let kinds: Vec<_> = generator()
            .generate(&input)
            .unwrap_or_default()
            .into_iter()
            .map(|event| event.event_type)
            .collect();
        assert_eq!(
            kinds,
            vec![EventType::AcceptOffer, EventType::Harvest, EventType::EmptyChest]
        );
    }

    #[test]
    fn errors_discard_every_event() {
        let snapshot = world();
        let updates = [UpdatedEntity {
            entity_keys: vec!["seven".to_owned()],
            model_names: vec!["Trade".to_owned()],
        }];
        let positions = [RealmPosition {
            realm_id: RealmId(5),
            position: Position::new(1, 1),
        }];
        let input = GenerationInput {
            snapshot: &snapshot,
            updates: &updates,
            realm_resources: &[],
            realm_positions: &positions,
            reference_time: 5000,
        };
        assert!(generator().generate(&input).is_err());
    }
}
