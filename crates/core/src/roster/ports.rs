//! Remote-store port interfaces for roster data.
//!
//! Persistence of employees, shift types, and assignments is an external
//! collaborator; the core only speaks these request/response contracts.

use async_trait::async_trait;
use chrono::NaiveDate;
use rosterline_domain::{
    Assignment, Employee, EmployeeId, EmployeePatch, MonthToken, NewEmployee, Result, ShiftType,
    ShiftTypeId,
};

/// Employee list/create/patch operations against the remote store.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee>;

    async fn patch_employee(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee>;
}

/// Shift-type reference table, read-only from this core's perspective.
#[async_trait]
pub trait ShiftTypeCatalog: Send + Sync {
    async fn list_shift_types(&self) -> Result<Vec<ShiftType>>;
}

/// Assignment snapshot and authoritative cell writes.
#[async_trait]
pub trait AssignmentsGateway: Send + Sync {
    /// Full snapshot of the month's assignments.
    async fn list_assignments(&self, month: MonthToken) -> Result<Vec<Assignment>>;

    /// Authoritative upsert of one cell; `None` clears the cell.
    async fn upsert_assignment(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
        shift_type_id: Option<ShiftTypeId>,
    ) -> Result<()>;
}
