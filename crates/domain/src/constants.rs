//! Domain-level constants
//!
//! Centralized location for the defaults applied when server fields are
//! absent and for the bounds the scheduling contract clamps against.

/// Capacity applied when the server omits `max_work_days_per_month` (0 = unlimited).
pub const DEFAULT_MAX_WORK_DAYS_PER_MONTH: u32 = 0;

/// Consecutive-day ceiling applied when the server omits the field.
pub const DEFAULT_MAX_CONSECUTIVE_WORK_DAYS: u32 = 6;

/// Night-shift eligibility applied when the server omits the field.
pub const DEFAULT_CAN_WORK_NIGHT: bool = true;

/// Assumed workdays per person used by the headcount estimate.
pub const DEFAULT_PER_PERSON_WORKDAYS: u32 = 20;

/// Length of the rolling rest window the hard bound applies to.
pub const REST_WINDOW_DAYS: u32 = 7;
