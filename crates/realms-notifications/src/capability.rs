//! Capabilities the generator needs from its caller.
//!
//! The generator never reaches into data access on its own. Bonus tables
//! and chest contents come through these traits, injected at construction:
//!
//! - [`BonusSource`] answers "what percentage bonus does this level give
//!   this resource class". Implementations must be pure: the same level and
//!   class always give the same percentage within a pass.
//! - [`ResourceResolver`] answers "what is in this carrier's chest". It is
//!   only called for carriers that have already arrived.
//!
//! [`LevelBonusTables`] is the config-driven [`BonusSource`]. Any
//! `Fn(EntityId) -> ResolvedInventory` closure is a [`ResourceResolver`].

use serde::{Deserialize, Serialize};

use realms_types::{EntityId, ResourceAmount, ResourceClass};

// ---------------------------------------------------------------------------
// BonusSource
// ---------------------------------------------------------------------------

/// Source of level-driven production bonuses, as signed whole percentages.
pub trait BonusSource {
    /// Bonus granted by a realm at `level` to resources of `class`.
    fn realm_level_bonus(&self, level: u32, class: ResourceClass) -> i32;

    /// Bonus granted by a hyperstructure at `level` to resources of `class`.
    fn hyperstructure_level_bonus(&self, level: u32, class: ResourceClass) -> i32;
}

impl<T: BonusSource + ?Sized> BonusSource for &T {
    fn realm_level_bonus(&self, level: u32, class: ResourceClass) -> i32 {
        (**self).realm_level_bonus(level, class)
    }

    fn hyperstructure_level_bonus(&self, level: u32, class: ResourceClass) -> i32 {
        (**self).hyperstructure_level_bonus(level, class)
    }
}

/// Bonus percentages of one level, per resource class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBonus {
    /// Bonus applied to food.
    pub food: i32,
    /// Bonus applied to every other resource.
    pub resource: i32,
}

impl LevelBonus {
    const fn for_class(self, class: ResourceClass) -> i32 {
        match class {
            ResourceClass::Food => self.food,
            ResourceClass::Standard => self.resource,
        }
    }
}

/// Bonus table indexed by level.
///
/// Levels past the end of the table keep the last row's bonus. An empty
/// table grants nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelBonusTable {
    levels: Vec<LevelBonus>,
}

impl LevelBonusTable {
    /// Build a table from rows for level 0, 1, 2, ...
    pub const fn new(levels: Vec<LevelBonus>) -> Self {
        Self { levels }
    }

    /// Look up the bonus for `level` and `class`.
    pub fn bonus(&self, level: u32, class: ResourceClass) -> i32 {
        usize::try_from(level)
            .ok()
            .and_then(|index| self.levels.get(index))
            .or_else(|| self.levels.last())
            .map_or(0, |row| row.for_class(class))
    }
}

/// Realm and hyperstructure bonus tables, loaded from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBonusTables {
    /// Bonuses by realm level.
    #[serde(default = "default_level_table")]
    pub realm: LevelBonusTable,

    /// Bonuses by hyperstructure level.
    #[serde(default = "default_level_table")]
    pub hyperstructure: LevelBonusTable,
}

impl Default for LevelBonusTables {
    fn default() -> Self {
        Self {
            realm: default_level_table(),
            hyperstructure: default_level_table(),
        }
    }
}

impl BonusSource for LevelBonusTables {
    fn realm_level_bonus(&self, level: u32, class: ResourceClass) -> i32 {
        self.realm.bonus(level, class)
    }

    fn hyperstructure_level_bonus(&self, level: u32, class: ResourceClass) -> i32 {
        self.hyperstructure.bonus(level, class)
    }
}

/// +25% per level for both classes, capped at level 4.
fn default_level_table() -> LevelBonusTable {
    LevelBonusTable::new(
        [0, 25, 50, 75, 100]
            .into_iter()
            .map(|percent| LevelBonus {
                food: percent,
                resource: percent,
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// ResourceResolver
// ---------------------------------------------------------------------------

/// Contents of a carrier's chest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInventory {
    /// Resources in the chest.
    pub resources: Vec<ResourceAmount>,
    /// Inventory slot index of each resource.
    pub indices: Vec<u64>,
}

/// Resolves the goods a carrier entity holds.
pub trait ResourceResolver {
    /// Contents of `entity`'s chest. An entity with nothing resolvable
    /// yields an empty inventory.
    fn resolve(&self, entity: EntityId) -> ResolvedInventory;
}

impl<F> ResourceResolver for F
where
    F: Fn(EntityId) -> ResolvedInventory,
{
    fn resolve(&self, entity: EntityId) -> ResolvedInventory {
        self(entity)
    }
}
