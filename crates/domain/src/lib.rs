//! # Rosterline Domain
//!
//! Business domain types and models for the shift-roster editor.
//!
//! This crate contains:
//! - Domain data types (Employee, ShiftType, Assignment, drafts, demand)
//! - Domain error types and Result definitions
//! - Calendar arithmetic and holiday classification
//! - Holiday preset tables
//!
//! ## Architecture
//! - No dependencies on other Rosterline crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod calendar;
pub mod constants;
pub mod errors;
pub mod presets;
pub mod types;

// Re-export commonly used items
pub use calendar::{calendar_days, weekday_label, HolidayCalendar, MonthToken};
pub use errors::*;
pub use types::*;
