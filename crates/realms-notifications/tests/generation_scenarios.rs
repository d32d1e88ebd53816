//! End-to-end generation passes over small hand-built worlds.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use realms_notifications::{
    GenerationInput, LevelBonus, LevelBonusTable, LevelBonusTables, NotificationError,
    NotificationGenerator, RealmPosition, RealmResources, ResolvedInventory, WorldSnapshot,
    realms_positions, realms_resources,
};
use realms_production::ProductionClock;
use realms_types::{
    ArrivalTimeRecord, CaravanMembersRecord, CarrierType, EmptyChestData, EntityId, EntityKey,
    EventType, InventoryRecord, LaborRecord, NotificationData, NotificationEvent, Position,
    RealmId, RealmRecord, ResourceAmount, ResourceId, TradeStatusRecord, UpdatedEntity,
};
use rust_decimal_macros::dec;

const REALM: EntityId = EntityId(100);
const HOME: Position = Position::new(40, 60);

/// Realm level 1 grants +10% and hyperstructure level 1 grants +20%.
fn bonuses() -> LevelBonusTables {
    let table = |percent| {
        LevelBonusTable::new(vec![
            LevelBonus::default(),
            LevelBonus {
                food: percent,
                resource: percent,
            },
        ])
    };
    LevelBonusTables {
        realm: table(10),
        hyperstructure: table(20),
    }
}

fn chest(entity: EntityId) -> ResolvedInventory {
    ResolvedInventory {
        resources: vec![ResourceAmount {
            resource_id: ResourceId(3),
            amount: entity.into_inner() * 10,
        }],
        indices: vec![0],
    }
}

type Generator = NotificationGenerator<LevelBonusTables, fn(EntityId) -> ResolvedInventory>;

fn generator() -> Generator {
    NotificationGenerator::new(
        ProductionClock::default(),
        bonuses(),
        chest as fn(EntityId) -> ResolvedInventory,
    )
}

fn trade_update(keys: &[&str]) -> UpdatedEntity {
    UpdatedEntity {
        entity_keys: keys.iter().map(|k| (*k).to_owned()).collect(),
        model_names: vec!["Trade".to_owned(), "Status".to_owned()],
    }
}

fn world() -> WorldSnapshot {
    let mut snapshot = WorldSnapshot::new();
    snapshot.realm.insert(
        REALM,
        RealmRecord {
            realm_id: RealmId(7),
            resource_types_packed: 0x03,
            resource_types_count: 1,
            level: 1,
        },
    );
    snapshot.position.insert(REALM, HOME);
    snapshot.labor.insert(
        EntityKey::realm_resource(REALM, ResourceId::WHEAT),
        LaborRecord {
            balance: 10_000,
            last_harvest: 1000,
            multiplier: 2,
        },
    );
    snapshot
}

fn add_carrier(snapshot: &mut WorldSnapshot, entity: EntityId, arrives_at: u64) {
    snapshot
        .inventory
        .insert(entity, InventoryRecord { items_count: 1 });
    snapshot.position.insert(entity, HOME);
    snapshot
        .arrival_time
        .insert(entity, ArrivalTimeRecord { arrives_at });
}

fn run(
    snapshot: &WorldSnapshot,
    updates: &[UpdatedEntity],
    reference_time: u64,
) -> Result<Vec<NotificationEvent>, NotificationError> {
    let resources = realms_resources(snapshot, &[REALM], Some(1));
    let positions = realms_positions(snapshot, &[REALM]);
    generator().generate(&GenerationInput {
        snapshot,
        updates,
        realm_resources: &resources,
        realm_positions: &positions,
        reference_time,
    })
}

#[test]
fn ready_wheat_reports_display_amount() {
    // 21 * 2 * 1.1 * 1.2 = 55.44 -> 55 -> 0.055
    let events = run(&world(), &[], 5000).unwrap();
    assert_eq!(
        events,
        vec![NotificationEvent::harvest(REALM, ResourceId::WHEAT, dec!(0.055))]
    );
    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(json["keys"], serde_json::json!(["100", "254"]));
}

#[test]
fn realm_without_hyperstructure_gets_no_harvest() {
    let snapshot = world();
    let resources = realms_resources(&snapshot, &[REALM], None);
    let events = generator()
        .harvest_notifications(&snapshot, &resources, 5000)
        .unwrap();
    assert!(events.is_empty());
}

#[test]
fn raider_arrival_emits_empty_chest() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 4000);

    let events = run(&snapshot, &[], 5000).unwrap();
    let chest = events
        .iter()
        .find(|event| event.event_type == EventType::EmptyChest)
        .expect("chest event");

    assert_eq!(chest.keys, vec!["9".to_owned()]);
    assert_eq!(
        chest.data,
        Some(NotificationData::EmptyChest(EmptyChestData {
            destination_realm_id: RealmId(7),
            carrier_type: CarrierType::Raiders,
            realm_entity_id: Some(REALM),
            entity_id: EntityId(9),
            resources: vec![ResourceAmount {
                resource_id: ResourceId(3),
                amount: 90,
            }],
            indices: vec![0],
        }))
    );
}

#[test]
fn arrival_boundary_is_inclusive() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 5000);
    add_carrier(&mut snapshot, EntityId(10), 5001);
    snapshot
        .caravan_members
        .insert(EntityId(9), CaravanMembersRecord { key: 4, count: 3 });

    let events = generator().arrival_notifications(
        &snapshot,
        &[RealmPosition {
            realm_id: RealmId(7),
            position: HOME,
        }],
        5000,
    );
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0].data,
        Some(NotificationData::EmptyChest(data)) if data.carrier_type == CarrierType::Caravan
    ));
}

#[test]
fn carriers_with_several_slot_sets_are_ignored() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 10);
    snapshot
        .inventory
        .insert(EntityId(9), InventoryRecord { items_count: 2 });

    let events = run(&snapshot, &[], 5000).unwrap();
    assert!(events.iter().all(|e| e.event_type != EventType::EmptyChest));
}

#[test]
fn trade_bursts_collapse_only_when_adjacent() {
    let mut snapshot = world();
    for (trade, value) in [(1_u64, 0_u8), (2, 1), (3, 0)] {
        snapshot
            .trade_status
            .insert(EntityKey::single(trade), TradeStatusRecord { value });
    }
    // Proposed, Proposed, Accepted, Accepted, Proposed
    let updates = [
        trade_update(&["1"]),
        trade_update(&["1"]),
        trade_update(&["2"]),
        trade_update(&["2"]),
        trade_update(&["1"]),
    ];

    let events = generator().trade_notifications(&snapshot, &updates).unwrap();
    let kinds: Vec<_> = events.iter().map(|event| event.event_type).collect();
    assert_eq!(
        kinds,
        vec![EventType::MakeOffer, EventType::AcceptOffer, EventType::MakeOffer]
    );
}

#[test]
fn malformed_trade_key_fails_the_whole_pass() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 10);
    let result = run(&snapshot, &[trade_update(&["0x", "1"])], 5000);
    assert!(matches!(result, Err(NotificationError::MalformedKey { .. })));
}

#[test]
fn generation_is_idempotent() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 10);
    snapshot
        .trade_status
        .insert(EntityKey::single(5_u64), TradeStatusRecord { value: 2 });
    let updates = [trade_update(&["5"])];

    let first = run(&snapshot, &updates, 5000).unwrap();
    let second = run(&snapshot, &updates, 5000).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn earlier_reference_time_is_tolerated() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 4000);

    let later = run(&snapshot, &[], 5000).unwrap();
    let earlier = run(&snapshot, &[], 3000).unwrap();
    assert_eq!(later.len(), 2);
    // the carrier has not arrived yet at 3000; wheat is still harvestable
    assert_eq!(earlier.len(), 1);
    assert_eq!(earlier[0].event_type, EventType::Harvest);
}

#[test]
fn input_file_shape_round_trips_through_serde() {
    let mut snapshot = world();
    add_carrier(&mut snapshot, EntityId(9), 4000);
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: WorldSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(run(&restored, &[], 5000).unwrap(), run(&snapshot, &[], 5000).unwrap());

    let resources: Vec<RealmResources> = realms_resources(&snapshot, &[REALM], Some(1));
    assert_eq!(
        resources[0].resource_ids,
        vec![ResourceId::WHEAT, ResourceId::FISH, ResourceId(3)]
    );
}
