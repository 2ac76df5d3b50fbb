//! Export projection: matrix and detail views of the reconciled state.
//!
//! A pure read of the assignment store joined against reference data; no
//! stored state is mutated. Dangling references are skipped silently, since
//! they indicate a transient cross-fetch race rather than data loss.

pub mod ports;

use std::collections::HashMap;

use chrono::NaiveTime;
use rosterline_domain::{
    calendar_days, weekday_label, Employee, HolidayCalendar, MonthToken,
};
use tracing::debug;

use crate::roster::{AssignmentStore, ShiftTypeIndex};

pub use ports::SpreadsheetSink;

/// Marker appended to holiday column headers.
const HOLIDAY_MARKER: &str = "（假）";

/// Day-by-employee matrix using shift codes; blank cell = no assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSheet {
    /// ISO date per column.
    pub header_days: Vec<String>,
    /// Weekday label per column, holiday-annotated.
    pub header_labels: Vec<String>,
    /// One row per employee: display name plus one code cell per day.
    pub rows: Vec<(String, Vec<String>)>,
}

/// One row of the flat detail listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub day: String,
    pub weekday: String,
    pub holiday: bool,
    pub employee: String,
    pub shift_code: String,
    pub shift_name: String,
    pub start: String,
    pub end: String,
    pub note: String,
    pub special_requirements: String,
}

/// The two tabular views handed to a spreadsheet sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTables {
    pub matrix: MatrixSheet,
    pub details: Vec<DetailRow>,
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

/// Project the current state into the matrix and detail tables.
pub fn project_export(
    month: MonthToken,
    calendar: &HolidayCalendar,
    employees: &[Employee],
    shift_types: &ShiftTypeIndex,
    store: &AssignmentStore,
) -> ExportTables {
    let days = calendar_days(month, calendar);

    let header_days: Vec<String> = days.iter().map(|d| d.day.to_string()).collect();
    let header_labels: Vec<String> = days
        .iter()
        .map(|d| {
            let label = weekday_label(d.day);
            if d.holiday { format!("{label}{HOLIDAY_MARKER}") } else { label.to_string() }
        })
        .collect();

    let rows = employees
        .iter()
        .map(|employee| {
            let cells = days
                .iter()
                .map(|d| {
                    store
                        .get(employee.id, d.day)
                        .map(|a| a.shift_code.clone())
                        .unwrap_or_default()
                })
                .collect();
            (employee.name.clone(), cells)
        })
        .collect();

    let employees_by_id: HashMap<_, _> = employees.iter().map(|e| (e.id, e)).collect();
    let mut skipped = 0usize;
    let mut details: Vec<DetailRow> = store
        .iter()
        .filter_map(|assignment| {
            let (Some(employee), Some(shift)) = (
                employees_by_id.get(&assignment.employee_id),
                shift_types.get(assignment.shift_type_id),
            ) else {
                skipped += 1;
                return None;
            };
            Some(DetailRow {
                day: assignment.day.to_string(),
                weekday: weekday_label(assignment.day).to_string(),
                holiday: calendar.is_holiday(assignment.day),
                employee: employee.name.clone(),
                shift_code: assignment.shift_code.clone(),
                shift_name: assignment.shift_name.clone(),
                start: format_time(shift.start_time),
                end: format_time(shift.end_time),
                note: assignment.note.clone().unwrap_or_default(),
                special_requirements: employee.special_requirements.clone().unwrap_or_default(),
            })
        })
        .collect();
    if skipped > 0 {
        debug!(skipped, "detail rows with dangling references skipped");
    }

    details.sort_by(|a, b| {
        let left = format!("{}{}{}", a.day, a.shift_code, a.employee);
        let right = format!("{}{}{}", b.day, b.shift_code, b.employee);
        left.cmp(&right)
    });

    ExportTables { matrix: MatrixSheet { header_days, header_labels, rows }, details }
}
