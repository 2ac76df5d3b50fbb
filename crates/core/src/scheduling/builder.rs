//! Assembles the scheduling constraint payload from UI-level parameters.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rosterline_domain::constants::{DEFAULT_PER_PERSON_WORKDAYS, REST_WINDOW_DAYS};
use rosterline_domain::presets::holiday_preset_dates;
use rosterline_domain::{
    DemandSummary, DemandTargets, GenerateRequest, HolidayCalendar, MonthToken, Result,
    RosterError,
};

use crate::demand::project_demand;

/// Raw scheduling parameters as a user would enter them.
///
/// Values are kept unclamped and free-text until [`build`](Self::build) so
/// the same draft also feeds the demand projection and calendar headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequestDraft {
    pub weekday_targets: [i64; 3],
    pub holiday_targets: [i64; 3],
    pub weekend_as_holiday: bool,
    /// Extra holiday dates, whitespace/comma separated `YYYY-MM-DD` tokens.
    pub holiday_dates_text: String,
    pub overwrite: bool,
    /// Meaningful only when not overwriting. The UI disables the combination
    /// but the contract does not enforce it; both fields are sent as given.
    pub trim_overstaff_to_off: bool,
    pub prefer_clustered_work: bool,
    pub prefer_same_shift_within_block: bool,
    pub min_rest_days_per_7: i64,
    pub max_consecutive_work_days: i64,
    /// Assumed workdays per person for the headcount estimate; not part of
    /// the engine contract.
    pub per_person_workdays: i64,
}

impl Default for ScheduleRequestDraft {
    fn default() -> Self {
        Self {
            weekday_targets: [1, 1, 1],
            holiday_targets: [2, 2, 1],
            weekend_as_holiday: true,
            holiday_dates_text: String::new(),
            overwrite: false,
            trim_overstaff_to_off: true,
            prefer_clustered_work: true,
            prefer_same_shift_within_block: true,
            min_rest_days_per_7: 2,
            max_consecutive_work_days: 6,
            per_person_workdays: DEFAULT_PER_PERSON_WORKDAYS as i64,
        }
    }
}

impl ScheduleRequestDraft {
    /// Parse the holiday text into sorted, deduplicated dates.
    ///
    /// Blank tokens are discarded; malformed dates are rejected rather than
    /// silently dropped.
    pub fn parse_holiday_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates = BTreeSet::new();
        for token in self
            .holiday_dates_text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let date: NaiveDate = token.parse().map_err(|_| {
                RosterError::InvalidInput(format!("invalid holiday date: {token:?}"))
            })?;
            dates.insert(date);
        }
        Ok(dates.into_iter().collect())
    }

    /// Holiday classification rule implied by the current parameters.
    pub fn holiday_calendar(&self) -> Result<HolidayCalendar> {
        Ok(HolidayCalendar::new(self.parse_holiday_dates()?, self.weekend_as_holiday))
    }

    /// Clamped staffing targets for the demand projection.
    pub fn demand_targets(&self) -> DemandTargets {
        DemandTargets::clamped(self.weekday_targets, self.holiday_targets)
    }

    /// Demand projection for `month` under the current parameters.
    pub fn demand_summary(&self, month: MonthToken) -> Result<DemandSummary> {
        let calendar = self.holiday_calendar()?;
        Ok(project_demand(month, &calendar, self.demand_targets(), self.per_person_workdays))
    }

    /// Union the jurisdiction preset for `year` into the holiday text.
    ///
    /// User-entered tokens are kept verbatim (even unparsable ones); the
    /// weekend flag is forced on, matching the preset's assumptions.
    pub fn merge_preset(&mut self, year: i32) {
        let mut tokens: BTreeSet<String> = self
            .holiday_dates_text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        tokens.extend(holiday_preset_dates(year).into_iter().map(|d| d.to_string()));
        self.holiday_dates_text = tokens.into_iter().collect::<Vec<_>>().join("\n");
        self.weekend_as_holiday = true;
    }

    /// Assemble the full constraint payload, clamping the hard bounds.
    pub fn build(&self) -> Result<GenerateRequest> {
        let targets = self.demand_targets();
        let clamp = |v: i64| u32::try_from(v.max(0)).unwrap_or(u32::MAX);
        Ok(GenerateRequest {
            weekday_morning: targets.weekday.morning,
            weekday_evening: targets.weekday.evening,
            weekday_night: targets.weekday.night,
            holiday_morning: targets.holiday.morning,
            holiday_evening: targets.holiday.evening,
            holiday_night: targets.holiday.night,
            weekend_as_holiday: self.weekend_as_holiday,
            holiday_dates: self.parse_holiday_dates()?,
            overwrite: self.overwrite,
            trim_overstaff_to_off: self.trim_overstaff_to_off,
            prefer_clustered_work: self.prefer_clustered_work,
            prefer_same_shift_within_block: self.prefer_same_shift_within_block,
            min_rest_days_per_7: clamp(self.min_rest_days_per_7).min(REST_WINDOW_DAYS),
            max_consecutive_work_days: clamp(self.max_consecutive_work_days),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_text_splits_on_whitespace_and_commas() {
        let draft = ScheduleRequestDraft {
            holiday_dates_text: "2026-01-01, 2026-02-28\n\n 2026-01-01\t2026-04-04".into(),
            ..ScheduleRequestDraft::default()
        };
        let dates = draft.parse_holiday_dates().unwrap();
        let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["2026-01-01", "2026-02-28", "2026-04-04"]);
    }

    #[test]
    fn malformed_holiday_dates_are_rejected() {
        let draft = ScheduleRequestDraft {
            holiday_dates_text: "2026-01-01 not-a-date".into(),
            ..ScheduleRequestDraft::default()
        };
        assert!(matches!(draft.parse_holiday_dates(), Err(RosterError::InvalidInput(_))));
    }

    #[test]
    fn build_clamps_targets_and_hard_bounds() {
        let draft = ScheduleRequestDraft {
            weekday_targets: [-1, 2, 3],
            holiday_targets: [4, -5, 6],
            min_rest_days_per_7: 12,
            max_consecutive_work_days: -3,
            ..ScheduleRequestDraft::default()
        };
        let request = draft.build().unwrap();
        assert_eq!(request.weekday_morning, 0);
        assert_eq!(request.holiday_evening, 0);
        assert_eq!(request.min_rest_days_per_7, 7);
        assert_eq!(request.max_consecutive_work_days, 0);
    }

    #[test]
    fn build_forwards_the_overwrite_trim_combination_as_given() {
        let draft = ScheduleRequestDraft {
            overwrite: true,
            trim_overstaff_to_off: true,
            ..ScheduleRequestDraft::default()
        };
        let request = draft.build().unwrap();
        assert!(request.overwrite);
        assert!(request.trim_overstaff_to_off);
    }

    #[test]
    fn demand_summary_reflects_the_extra_holiday_dates() {
        let draft = ScheduleRequestDraft {
            holiday_dates_text: "2026-02-17".into(),
            ..ScheduleRequestDraft::default()
        };
        let summary = draft.demand_summary("2026-02".parse().unwrap()).unwrap();
        // 8 weekend days plus one explicit weekday holiday.
        assert_eq!(summary.holiday_days, 9);
        assert_eq!(summary.weekday_days, 19);
        assert_eq!(summary.per_person, 20);
        // 19 * 3 + 9 * 5 = 102 units, 102 / 20 rounds up to 6.
        assert_eq!(summary.total_units, 102);
        assert_eq!(summary.estimated_headcount, 6);
    }

    #[test]
    fn merge_preset_unions_without_dropping_user_dates() {
        let mut draft = ScheduleRequestDraft {
            holiday_dates_text: "2026-08-08".into(),
            weekend_as_holiday: false,
            ..ScheduleRequestDraft::default()
        };
        draft.merge_preset(2026);
        assert!(draft.weekend_as_holiday);
        assert!(draft.holiday_dates_text.contains("2026-08-08"));
        assert!(draft.holiday_dates_text.contains("2026-01-01"));
        let dates = draft.parse_holiday_dates().unwrap();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn merge_preset_for_an_unknown_year_keeps_the_text_stable() {
        let mut draft = ScheduleRequestDraft {
            holiday_dates_text: "2025-05-05".into(),
            ..ScheduleRequestDraft::default()
        };
        draft.merge_preset(2025);
        assert_eq!(draft.holiday_dates_text, "2025-05-05");
    }
}
