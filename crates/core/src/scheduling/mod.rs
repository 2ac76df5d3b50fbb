//! Scheduling request assembly and the engine port.

pub mod builder;
pub mod ports;

pub use builder::ScheduleRequestDraft;
pub use ports::SchedulingEngine;
