//! # Rosterline Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The assignment store and employee parameter reconciler
//! - The demand and export projections
//! - The scheduling request builder
//! - Port/adapter interfaces (traits) for every remote collaborator
//!
//! ## Architecture Principles
//! - Only depends on `rosterline-domain`
//! - No HTTP, file, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod demand;
pub mod export;
pub mod roster;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use demand::project_demand;
pub use export::{project_export, DetailRow, ExportTables, MatrixSheet, SpreadsheetSink};
pub use roster::ports::{AssignmentsGateway, EmployeeDirectory, ShiftTypeCatalog};
pub use roster::{AssignmentStore, DraftBook, RosterService, ShiftTypeIndex};
pub use scheduling::{ScheduleRequestDraft, SchedulingEngine};
