//! Static holiday preset table for a fixed jurisdiction (Taiwan).
//!
//! Public-holiday blocks, including substitute days, as commonly published
//! for the 2026 calendar. Announcements can shift individual dates, so the
//! preset is merged into the user's explicit set rather than replacing it.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Inclusive `(start, end)` holiday blocks for 2026.
const BLOCKS_2026: &[(&str, &str)] = &[
    // New Year's Day
    ("2026-01-01", "2026-01-01"),
    // Lunar New Year
    ("2026-02-14", "2026-02-22"),
    // Peace Memorial Day
    ("2026-02-27", "2026-03-01"),
    // Children's Day + Tomb Sweeping
    ("2026-04-03", "2026-04-06"),
    // Labor Day
    ("2026-05-01", "2026-05-03"),
    // Dragon Boat Festival
    ("2026-06-19", "2026-06-21"),
    // Mid-Autumn + Teachers' Day
    ("2026-09-25", "2026-09-28"),
    // National Day
    ("2026-10-09", "2026-10-11"),
    // Retrocession Day
    ("2026-10-24", "2026-10-26"),
    // Constitution Day
    ("2026-12-25", "2026-12-27"),
];

/// Known holiday dates for the given year, sorted ascending.
///
/// Years without a published table yield an empty list.
pub fn holiday_preset_dates(year: i32) -> Vec<NaiveDate> {
    if year != 2026 {
        return Vec::new();
    }

    let mut dates = BTreeSet::new();
    for (start, end) in BLOCKS_2026 {
        let (Ok(start), Ok(end)) = (start.parse::<NaiveDate>(), end.parse::<NaiveDate>()) else {
            continue;
        };
        let mut day = start;
        while day <= end {
            dates.insert(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
    }
    dates.into_iter().collect()
}
