use chrono::{Duration, NaiveDate};

use crate::models::{CycleConfiguration, CycleForecast, Phase};

// Thresholds come from a 28-day cycle and are not rescaled to the configured length.

/// First cycle day of the ovulation window.
pub const OVULATION_START_DAY: i64 = 13;
/// First cycle day of the luteal phase.
pub const LUTEAL_START_DAY: i64 = 17;

/// Whole days from the last recorded period start to `as_of`.
///
/// Negative when `as_of` precedes the start; nothing downstream clamps it.
/// A non-positive cycle length yields `None` so the remainder arithmetic
/// below can never divide by zero.
fn days_since_start(config: &CycleConfiguration, as_of: NaiveDate) -> Option<i64> {
    let start = config.last_period_start?;
    if config.cycle_length <= 0 {
        return None;
    }
    Some((as_of - start).num_days())
}

/// Zero-based day within the current cycle.
///
/// In `[0, cycle_length)` whenever `as_of >= last_period_start`. Earlier dates
/// produce a negative remainder, which is passed through untouched.
pub fn compute_cycle_day(config: &CycleConfiguration, as_of: NaiveDate) -> Option<i64> {
    let days = days_since_start(config, as_of)?;
    days.checked_rem(config.cycle_length)
}

pub fn classify_phase(config: &CycleConfiguration, as_of: NaiveDate) -> Phase {
    let Some(cycle_day) = compute_cycle_day(config, as_of) else {
        return Phase::Unknown;
    };

    if cycle_day < config.period_length {
        Phase::Menstrual
    } else if cycle_day < OVULATION_START_DAY {
        Phase::Follicular
    } else if cycle_day < LUTEAL_START_DAY {
        Phase::Ovulation
    } else {
        Phase::Luteal
    }
}

/// Days until the next period starts; `Some(0)` on the first day of a cycle.
pub fn days_until_next_period(config: &CycleConfiguration, as_of: NaiveDate) -> Option<i64> {
    let cycle_day = compute_cycle_day(config, as_of)?;
    let remaining = config.cycle_length.checked_sub(cycle_day)?;
    if remaining == config.cycle_length {
        Some(0)
    } else {
        Some(remaining)
    }
}

/// Start date of the next projected period.
///
/// On a cycle boundary this is `as_of` itself, matching the zero returned by
/// [`days_until_next_period`].
pub fn predicted_next_period_date(
    config: &CycleConfiguration,
    as_of: NaiveDate,
) -> Option<NaiveDate> {
    let start = config.last_period_start?;
    let days = days_since_start(config, as_of)?;
    let cycle_day = compute_cycle_day(config, as_of)?;

    let cycles_elapsed = days.div_euclid(config.cycle_length);
    let cycles_ahead = if cycle_day == 0 {
        cycles_elapsed
    } else {
        cycles_elapsed.checked_add(1)?
    };
    let offset = cycles_ahead.checked_mul(config.cycle_length)?;

    start.checked_add_signed(Duration::try_days(offset)?)
}

/// Whether `date` falls inside a period, projected forward from the last start.
///
/// Dates before the last recorded start are never period days.
pub fn is_period_day(config: &CycleConfiguration, date: NaiveDate) -> bool {
    match days_since_start(config, date) {
        Some(days) if days >= 0 => days
            .checked_rem(config.cycle_length)
            .is_some_and(|cycle_day| cycle_day < config.period_length),
        _ => false,
    }
}

/// A projected period day strictly after `today`.
pub fn is_predicted_period(config: &CycleConfiguration, date: NaiveDate, today: NaiveDate) -> bool {
    date > today && is_period_day(config, date)
}

pub fn forecast(config: &CycleConfiguration, as_of: NaiveDate) -> CycleForecast {
    CycleForecast {
        phase: classify_phase(config, as_of),
        cycle_day: compute_cycle_day(config, as_of),
        days_until_next_period: days_until_next_period(config, as_of),
        predicted_next_period: predicted_next_period_date(config, as_of),
    }
}
