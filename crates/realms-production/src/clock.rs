//! The production clock: labor math bound to a validated [`LaborConfig`].
//!
//! Callers that work per resource rather than per raw yield use this type.
//! It picks the base yield from the resource's class and can never be
//! built with a zero cycle length, so the cycle checks in [`crate::labor`]
//! only fire for callers using the free functions directly.

use rust_decimal::Decimal;
use tracing::debug;

use realms_types::{LaborRecord, ResourceClass, ResourceId};

use crate::config::LaborConfig;
use crate::error::ProductionError;
use crate::labor::{self, BonusPercents};

/// Stateless production calculator for one game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionClock {
    config: LaborConfig,
}

impl ProductionClock {
    /// Create a clock from a labor configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`LaborConfig::validate`].
    pub fn new(config: LaborConfig) -> Result<Self, ProductionError> {
        config.validate()?;
        debug!(
            cycle_length = config.base_labor_units,
            food_yield = config.base_food_per_cycle,
            resource_yield = config.base_resources_per_cycle,
            precision = config.resource_precision,
            "production clock configured"
        );
        Ok(Self { config })
    }

    /// The configuration behind this clock.
    pub const fn config(&self) -> &LaborConfig {
        &self.config
    }

    /// Seconds in one labor cycle.
    pub const fn cycle_length(&self) -> u64 {
        self.config.base_labor_units
    }

    /// Classify a resource as food or standard.
    pub fn classify(&self, resource: ResourceId) -> ResourceClass {
        self.config.classify(resource)
    }

    /// Per-cycle output of `multiplier` buildings of the given class.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::ArithmeticOverflow`] if the product does
    /// not fit.
    pub fn productivity(
        &self,
        class: ResourceClass,
        multiplier: u64,
        level_bonus: i32,
        secondary_bonus: i32,
    ) -> Result<Decimal, ProductionError> {
        labor::productivity(
            self.config.base_yield(class),
            multiplier,
            self.cycle_length(),
            level_bonus,
            secondary_bonus,
        )
    }

    /// Seconds until the account's next cycle boundary, if one is pending.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::ArithmeticOverflow`] on checked arithmetic
    /// failure.
    pub fn time_to_next_harvest(
        &self,
        account: &LaborRecord,
        reference_time: u64,
    ) -> Result<Option<u64>, ProductionError> {
        labor::time_to_next_harvest(
            account.balance,
            account.last_harvest,
            reference_time,
            self.cycle_length(),
        )
    }

    /// Amount harvestable from the account right now, untruncated.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::ArithmeticOverflow`] if the product does
    /// not fit.
    pub fn next_harvest_amount(
        &self,
        account: &LaborRecord,
        class: ResourceClass,
        reference_time: u64,
        bonuses: BonusPercents,
    ) -> Result<Decimal, ProductionError> {
        labor::next_harvest_amount(
            account,
            self.cycle_length(),
            self.config.base_yield(class),
            reference_time,
            bonuses,
        )
    }

    /// Truncate an amount and scale it down by the resource precision for
    /// display.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::ArithmeticOverflow`] on checked arithmetic
    /// failure.
    pub fn display_amount(&self, amount: Decimal) -> Result<Decimal, ProductionError> {
        labor::scale_down(
            labor::display_quantity(amount),
            self.config.resource_precision,
        )
    }

    /// Elapsed share of the account's current cycle, as a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::ArithmeticOverflow`] on checked arithmetic
    /// failure.
    pub fn cycle_progress_percent(
        &self,
        account: &LaborRecord,
        reference_time: u64,
    ) -> Result<Decimal, ProductionError> {
        let pending = self.time_to_next_harvest(account, reference_time)?;
        labor::cycle_progress_percent(pending, self.cycle_length())
    }
}

impl Default for ProductionClock {
    fn default() -> Self {
        Self {
            config: LaborConfig::default(),
        }
    }
}
