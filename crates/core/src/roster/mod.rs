//! Roster state: assignment matrix, parameter drafts, and the session
//! service that keeps them consistent with the remote store.

pub mod assignments;
pub mod drafts;
pub mod ports;
pub mod service;

pub use assignments::{AssignmentStore, ShiftTypeIndex};
pub use drafts::DraftBook;
pub use service::RosterService;
