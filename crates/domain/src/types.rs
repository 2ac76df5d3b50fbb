//! Domain types and models
//!
//! Wire-facing shapes mirror the remote store's DTOs: optional fields stay
//! `Option` here and are defaulted at the reconciler boundary, so downstream
//! logic never branches on absence.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CAN_WORK_NIGHT, DEFAULT_MAX_CONSECUTIVE_WORK_DAYS, DEFAULT_MAX_WORK_DAYS_PER_MONTH,
};

/// Opaque employee identity assigned by the remote store.
pub type EmployeeId = i64;

/// Opaque shift-type identity assigned by the remote store.
pub type ShiftTypeId = i64;

/// Employee as returned by the remote store.
///
/// The parameter subset is nullable on the wire; defaults are applied when an
/// [`EmployeeDraft`] is built from this, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub max_work_days_per_month: Option<u32>,
    #[serde(default)]
    pub max_consecutive_work_days: Option<u32>,
    #[serde(default)]
    pub can_work_night: Option<bool>,
    #[serde(default)]
    pub night_only: Option<bool>,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

/// Payload for creating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub max_work_days_per_month: u32,
    pub max_consecutive_work_days: u32,
    pub can_work_night: bool,
    pub night_only: bool,
    pub special_requirements: Option<String>,
}

impl NewEmployee {
    /// Apply the night-only invariant: night-only employees are always
    /// night-eligible.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.night_only {
            self.can_work_night = true;
        }
        self
    }
}

/// Partial update for an employee; `None` fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_work_days_per_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_consecutive_work_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_work_night: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub night_only: Option<bool>,
    /// Outer `None` = untouched; inner `None` = cleared remotely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<Option<String>>,
}

/// Shift type reference data (read-only from this core's perspective).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    pub id: ShiftTypeId,
    /// Short unique code, e.g. morning/evening/night/off/leave markers.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Whether the type counts as a work shift (off/leave do not).
    pub is_work: bool,
}

/// Composite key of the assignment matrix: one cell per (employee, day).
pub type AssignmentKey = (EmployeeId, NaiveDate);

/// One cell of the assignment matrix, with denormalized shift fields for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee_id: EmployeeId,
    pub day: NaiveDate,
    pub shift_type_id: ShiftTypeId,
    pub shift_code: String,
    pub shift_name: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl Assignment {
    /// Key of this cell in the assignment matrix.
    pub fn key(&self) -> AssignmentKey {
        (self.employee_id, self.day)
    }
}

/// Local editable copy of an employee's mutable parameter subset.
///
/// A draft with `dirty = true` holds unsaved edits and must survive
/// background reloads until explicitly saved or discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub max_work_days_per_month: u32,
    pub max_consecutive_work_days: u32,
    pub can_work_night: bool,
    pub night_only: bool,
    pub special_requirements: String,
    pub dirty: bool,
}

impl EmployeeDraft {
    /// Build a clean draft from server values, defaulting absent fields.
    pub fn from_server(employee: &Employee) -> Self {
        let night_only = employee.night_only.unwrap_or(false);
        Self {
            max_work_days_per_month: employee
                .max_work_days_per_month
                .unwrap_or(DEFAULT_MAX_WORK_DAYS_PER_MONTH),
            max_consecutive_work_days: employee
                .max_consecutive_work_days
                .unwrap_or(DEFAULT_MAX_CONSECUTIVE_WORK_DAYS),
            can_work_night: night_only || employee.can_work_night.unwrap_or(DEFAULT_CAN_WORK_NIGHT),
            night_only,
            special_requirements: employee.special_requirements.clone().unwrap_or_default(),
            dirty: false,
        }
    }
}

/// Derived per-day classification; computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: NaiveDate,
    pub holiday: bool,
}

/// Per-shift-kind staffing targets for one day classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTargets {
    pub morning: u32,
    pub evening: u32,
    pub night: u32,
}

/// Staffing targets split by day classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandTargets {
    pub weekday: DayTargets,
    pub holiday: DayTargets,
}

impl DemandTargets {
    /// Build targets from raw user-level integers, clamping negatives to zero.
    pub fn clamped(weekday: [i64; 3], holiday: [i64; 3]) -> Self {
        fn clamp(raw: [i64; 3]) -> DayTargets {
            let to_u32 = |v: i64| u32::try_from(v.max(0)).unwrap_or(u32::MAX);
            DayTargets { morning: to_u32(raw[0]), evening: to_u32(raw[1]), night: to_u32(raw[2]) }
        }
        Self { weekday: clamp(weekday), holiday: clamp(holiday) }
    }
}

/// Derived demand aggregate for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSummary {
    pub weekday_days: u32,
    pub holiday_days: u32,
    pub morning_units: u32,
    pub evening_units: u32,
    pub night_units: u32,
    /// Total work-units: each required shift instance counts as one unit.
    pub total_units: u32,
    /// Assumed per-person workload the estimate divides by (floored at 1).
    pub per_person: u32,
    /// Ceiling-divided headcount estimate.
    pub estimated_headcount: u32,
}

/// Full constraint payload sent to the external scheduling engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub weekday_morning: u32,
    pub weekday_evening: u32,
    pub weekday_night: u32,
    pub holiday_morning: u32,
    pub holiday_evening: u32,
    pub holiday_night: u32,
    pub weekend_as_holiday: bool,
    pub holiday_dates: Vec<NaiveDate>,
    /// Replace vs. fill-gaps semantics, resolved entirely by the engine.
    pub overwrite: bool,
    /// Meaningful only when not overwriting; forwarded as given either way.
    pub trim_overstaff_to_off: bool,
    pub prefer_clustered_work: bool,
    pub prefer_same_shift_within_block: bool,
    pub min_rest_days_per_7: u32,
    pub max_consecutive_work_days: u32,
}

/// Result of an auto-generate call; contains counts only, never cell data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateOutcome {
    pub created: u64,
    pub deleted: u64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Result of a fill-off call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillOffOutcome {
    pub created: u64,
    #[serde(default)]
    pub warnings: Vec<String>,
}
