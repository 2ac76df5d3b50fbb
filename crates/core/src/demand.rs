//! Staffing-demand projection over the classified calendar.
//!
//! Deterministic pure function of the month, the holiday calendar, the six
//! per-day-type targets, and the assumed per-person workload. No hidden
//! state; call it on demand, never cache it across unrelated mutations.

use rosterline_domain::{DemandSummary, DemandTargets, HolidayCalendar, MonthToken};

/// Aggregate the month's staffing demand.
///
/// Each required shift instance counts as exactly one work-unit (an explicit
/// simplifying assumption, not an hours model). The per-person divisor is
/// floored at 1; headcount is a ceiling division. Unit counts saturate at
/// `u32::MAX`, matching the clamping of the targets themselves.
pub fn project_demand(
    month: MonthToken,
    calendar: &HolidayCalendar,
    targets: DemandTargets,
    per_person: i64,
) -> DemandSummary {
    let mut weekday_days = 0u32;
    let mut holiday_days = 0u32;
    let mut morning_units = 0u32;
    let mut evening_units = 0u32;
    let mut night_units = 0u32;

    for day in month.iter_days() {
        let day_targets = if calendar.is_holiday(day) {
            holiday_days += 1;
            targets.holiday
        } else {
            weekday_days += 1;
            targets.weekday
        };
        morning_units = morning_units.saturating_add(day_targets.morning);
        evening_units = evening_units.saturating_add(day_targets.evening);
        night_units = night_units.saturating_add(day_targets.night);
    }

    let total_units =
        morning_units.saturating_add(evening_units).saturating_add(night_units);
    let per_person = u32::try_from(per_person.max(1)).unwrap_or(u32::MAX);
    let estimated_headcount = total_units.div_ceil(per_person);

    DemandSummary {
        weekday_days,
        holiday_days,
        morning_units,
        evening_units,
        night_units,
        total_units,
        per_person,
        estimated_headcount,
    }
}
