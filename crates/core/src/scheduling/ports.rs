//! Port interface for the external scheduling engine.
//!
//! The engine owns shift optimization entirely; this core only assembles the
//! constraint contract and interprets counts and warnings.

use async_trait::async_trait;
use rosterline_domain::{FillOffOutcome, GenerateOutcome, GenerateRequest, MonthToken, Result};

/// Remote auto-scheduler contract.
#[async_trait]
pub trait SchedulingEngine: Send + Sync {
    /// Run a bulk generation for the month under the given constraints.
    ///
    /// The response carries counts and warnings only, never per-cell data;
    /// callers must reload to observe the authoritative result.
    async fn generate(&self, month: MonthToken, request: GenerateRequest)
        -> Result<GenerateOutcome>;

    /// Fill every unassigned cell of the month with the off shift.
    async fn fill_off(&self, month: MonthToken, active_only: bool) -> Result<FillOffOutcome>;
}
