//! Labor production math for the Realms engine.
//!
//! Labor is bought in advance as a timestamp balance and converts into
//! harvestable goods every cycle. This crate computes how much is
//! harvestable, when the next cycle boundary falls, and how level and
//! hyperstructure bonuses stack on top of the base yield.
//!
//! # Modules
//!
//! - [`config`] -- Game-wide labor constants with serde defaults.
//! - [`error`] -- [`ProductionError`] for contract violations and overflow.
//! - [`labor`] -- Pure free functions over raw labor values.
//! - [`clock`] -- [`ProductionClock`], the same math bound to a validated
//!   config and selecting yields by resource class.

pub mod clock;
pub mod config;
pub mod error;
pub mod labor;

pub use clock::ProductionClock;
pub use config::LaborConfig;
pub use error::ProductionError;
pub use labor::{
    BonusPercents, LOW_LABOR_THRESHOLD_SECS, cycle_progress_percent, display_quantity,
    format_hours_minutes, has_labor_left, next_harvest_amount, productivity, scale_down,
    time_left, time_to_next_harvest,
};
