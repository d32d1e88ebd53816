//! Labor accrual and harvest math.
//!
//! A labor account is a timestamp `balance` up to which production has been
//! paid for, the timestamp of the `last_harvest`, and a `multiplier` counting
//! the productive buildings behind it. Every function here is pure: the
//! result depends only on the arguments.
//!
//! Bonuses are signed whole percentages. Each one becomes a factor
//! `1 + bonus / 100`, clamped at zero, and the factors compound:
//!
//! ```text
//! productivity = base_yield * multiplier * (1 + level/100) * (1 + secondary/100)
//! ```
//!
//! All math runs in [`Decimal`] fixed point. Results are only truncated by
//! [`display_quantity`] when shown, so repeated calls never compound
//! rounding error.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use realms_types::LaborRecord;

use crate::error::ProductionError;

/// Remaining labor at or below this many seconds is shown as none.
pub const LOW_LABOR_THRESHOLD_SECS: u64 = 60;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// The two bonus percentages applied to one harvest.
///
/// `secondary` is `None` when the owner has no qualifying structure. A
/// harvest without a settled secondary bonus is reported as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BonusPercents {
    /// Intrinsic realm level bonus.
    pub level: i32,
    /// Hyperstructure bonus, if one applies to this owner.
    pub secondary: Option<i32>,
}

impl BonusPercents {
    /// Bonuses with both sources present.
    pub const fn new(level: i32, secondary: i32) -> Self {
        Self {
            level,
            secondary: Some(secondary),
        }
    }
}

fn ensure_cycle_length(cycle_length: u64) -> Result<(), ProductionError> {
    if cycle_length == 0 {
        return Err(ProductionError::InvalidCycleLength);
    }
    Ok(())
}

/// Turn a percentage bonus into its multiplicative factor, clamped at zero.
fn bonus_factor(percent: i32) -> Decimal {
    let hundredths = i64::from(percent).saturating_add(100).max(0);
    Decimal::new(hundredths, 2)
}

/// Yield of one labor cycle for an account with `multiplier` buildings.
///
/// A multiplier of zero is a fully decayed account and produces nothing
/// whatever the bonuses.
///
/// # Errors
///
/// Returns [`ProductionError::InvalidCycleLength`] if `cycle_length` is zero
/// and [`ProductionError::ArithmeticOverflow`] if the product does not fit.
pub fn productivity(
    base_yield: u64,
    multiplier: u64,
    cycle_length: u64,
    level_bonus: i32,
    secondary_bonus: i32,
) -> Result<Decimal, ProductionError> {
    ensure_cycle_length(cycle_length)?;
    if multiplier == 0 {
        return Ok(Decimal::ZERO);
    }

    Decimal::from(base_yield)
        .checked_mul(Decimal::from(multiplier))
        .and_then(|base| base.checked_mul(bonus_factor(level_bonus)))
        .and_then(|leveled| leveled.checked_mul(bonus_factor(secondary_bonus)))
        .ok_or_else(|| ProductionError::overflow("productivity"))
}

/// Seconds until the next cycle boundary of an account that still has
/// labor ahead of `reference_time`.
///
/// Defined only when the account was harvested at least once, the reference
/// time is past that harvest, and the balance extends past the reference
/// time. Returns `Ok(None)` otherwise.
///
/// # Errors
///
/// Returns [`ProductionError::InvalidCycleLength`] if `cycle_length` is zero.
pub fn time_to_next_harvest(
    balance: u64,
    last_harvest: u64,
    reference_time: u64,
    cycle_length: u64,
) -> Result<Option<u64>, ProductionError> {
    ensure_cycle_length(cycle_length)?;
    if last_harvest == 0 || reference_time <= last_harvest || balance <= reference_time {
        return Ok(None);
    }

    let remaining = reference_time
        .checked_sub(last_harvest)
        .and_then(|elapsed| elapsed.checked_rem(cycle_length))
        .and_then(|into_cycle| cycle_length.checked_sub(into_cycle))
        .ok_or_else(|| ProductionError::overflow("time to next harvest"))?;
    Ok(Some(remaining))
}

/// Amount the account could harvest at `reference_time`.
///
/// Zero when the labor balance has run out, when no reference time is
/// available yet (`reference_time == 0`), or when the secondary bonus is
/// unsettled. Otherwise the account's [`productivity`]. The account's
/// `last_harvest` does not affect the amount.
///
/// # Errors
///
/// Propagates errors from [`productivity`].
pub fn next_harvest_amount(
    labor: &LaborRecord,
    cycle_length: u64,
    base_yield: u64,
    reference_time: u64,
    bonuses: BonusPercents,
) -> Result<Decimal, ProductionError> {
    ensure_cycle_length(cycle_length)?;
    let Some(secondary) = bonuses.secondary else {
        return Ok(Decimal::ZERO);
    };
    if reference_time == 0 || labor.balance <= reference_time {
        return Ok(Decimal::ZERO);
    }
    productivity(
        base_yield,
        labor.multiplier,
        cycle_length,
        bonuses.level,
        secondary,
    )
}

/// Seconds of labor left after `reference_time`, zero once exhausted.
pub const fn time_left(balance: u64, reference_time: u64) -> u64 {
    balance.saturating_sub(reference_time)
}

/// Whether the account has more than [`LOW_LABOR_THRESHOLD_SECS`] of labor
/// left.
pub const fn has_labor_left(balance: u64, reference_time: u64) -> bool {
    time_left(balance, reference_time) > LOW_LABOR_THRESHOLD_SECS
}

/// Share of the current cycle already elapsed, as a percentage.
///
/// Zero when there is no pending cycle boundary.
///
/// # Errors
///
/// Returns [`ProductionError::InvalidCycleLength`] if `cycle_length` is zero.
pub fn cycle_progress_percent(
    time_to_next: Option<u64>,
    cycle_length: u64,
) -> Result<Decimal, ProductionError> {
    ensure_cycle_length(cycle_length)?;
    let Some(remaining) = time_to_next else {
        return Ok(Decimal::ZERO);
    };

    let hundred = Decimal::ONE_HUNDRED;
    Decimal::from(remaining)
        .checked_mul(hundred)
        .and_then(|scaled| scaled.checked_div(Decimal::from(cycle_length)))
        .and_then(|left| hundred.checked_sub(left))
        .map(|progress| progress.max(Decimal::ZERO))
        .ok_or_else(|| ProductionError::overflow("cycle progress"))
}

/// Truncate a fixed-point amount toward zero for display.
pub fn display_quantity(amount: Decimal) -> u64 {
    if amount.is_sign_negative() {
        return 0;
    }
    amount.trunc().to_u64().unwrap_or(u64::MAX)
}

/// Scale a stored quantity down by the resource precision.
///
/// # Errors
///
/// Returns [`ProductionError::InvalidConfig`] if `precision` is zero.
pub fn scale_down(quantity: u64, precision: u64) -> Result<Decimal, ProductionError> {
    if precision == 0 {
        return Err(ProductionError::InvalidConfig {
            reason: "resource_precision must be positive".to_owned(),
        });
    }
    Decimal::from(quantity)
        .checked_div(Decimal::from(precision))
        .map(|scaled| scaled.normalize())
        .ok_or_else(|| ProductionError::overflow("display amount"))
}

/// Format a duration as hours and zero-padded minutes, e.g. `2h 05m`.
pub fn format_hours_minutes(seconds: u64) -> String {
    let hours = seconds.checked_div(SECONDS_PER_HOUR).unwrap_or(0);
    let minutes = seconds
        .checked_rem(SECONDS_PER_HOUR)
        .and_then(|rest| rest.checked_div(SECONDS_PER_MINUTE))
        .unwrap_or(0);
    format!("{hours}h {minutes:02}m")
}
