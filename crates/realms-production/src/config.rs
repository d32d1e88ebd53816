//! Game-wide labor constants.
//!
//! Values mirror the chain's labor configuration. They are loaded from the
//! `labor` section of the engine config file and default to the live game's
//! settings when omitted.

use serde::Deserialize;

use realms_types::{ResourceClass, ResourceId};

use crate::error::ProductionError;

/// Labor and harvest constants shared by every realm.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaborConfig {
    /// Seconds in one labor cycle.
    #[serde(default = "default_base_labor_units")]
    pub base_labor_units: u64,

    /// Units of food produced per cycle per multiplier.
    #[serde(default = "default_base_food_per_cycle")]
    pub base_food_per_cycle: u64,

    /// Units of a standard resource produced per cycle per multiplier.
    #[serde(default = "default_base_resources_per_cycle")]
    pub base_resources_per_cycle: u64,

    /// Scale between stored resource units and displayed amounts.
    #[serde(default = "default_resource_precision")]
    pub resource_precision: u64,

    /// Resources that produce as food.
    #[serde(default = "default_food_resource_ids")]
    pub food_resource_ids: Vec<ResourceId>,
}

impl Default for LaborConfig {
    fn default() -> Self {
        Self {
            base_labor_units: default_base_labor_units(),
            base_food_per_cycle: default_base_food_per_cycle(),
            base_resources_per_cycle: default_base_resources_per_cycle(),
            resource_precision: default_resource_precision(),
            food_resource_ids: default_food_resource_ids(),
        }
    }
}

impl LaborConfig {
    /// Check that every divisor and yield is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidCycleLength`] for a zero cycle and
    /// [`ProductionError::InvalidConfig`] for zero yields or precision.
    pub fn validate(&self) -> Result<(), ProductionError> {
        if self.base_labor_units == 0 {
            return Err(ProductionError::InvalidCycleLength);
        }
        if self.base_food_per_cycle == 0 || self.base_resources_per_cycle == 0 {
            return Err(ProductionError::InvalidConfig {
                reason: "base yields per cycle must be positive".to_owned(),
            });
        }
        if self.resource_precision == 0 {
            return Err(ProductionError::InvalidConfig {
                reason: "resource_precision must be positive".to_owned(),
            });
        }
        Ok(())
    }

    /// Base yield per cycle for a resource class.
    pub const fn base_yield(&self, class: ResourceClass) -> u64 {
        match class {
            ResourceClass::Food => self.base_food_per_cycle,
            ResourceClass::Standard => self.base_resources_per_cycle,
        }
    }

    /// Classify a resource as food or standard.
    pub fn classify(&self, resource: ResourceId) -> ResourceClass {
        ResourceClass::of(resource, &self.food_resource_ids)
    }
}

const fn default_base_labor_units() -> u64 {
    7200
}

const fn default_base_food_per_cycle() -> u64 {
    21
}

const fn default_base_resources_per_cycle() -> u64 {
    14
}

const fn default_resource_precision() -> u64 {
    1000
}

fn default_food_resource_ids() -> Vec<ResourceId> {
    vec![ResourceId::WHEAT, ResourceId::FISH]
}
