//! Roster session service - the single owner of all editable state.
//!
//! Holds the employee list, the shift-type reference table, the assignment
//! store, and the draft book, and coordinates every operation that crosses
//! the remote boundary. Remote failures abort the operation with no partial
//! mutation; dirty drafts are never discarded by any error path.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use rosterline_domain::{
    Employee, EmployeeDraft, EmployeeId, EmployeePatch, FillOffOutcome, GenerateOutcome,
    HolidayCalendar, MonthToken, NewEmployee, Result, RosterError, ShiftTypeId,
};
use tracing::{debug, info, warn};

use super::assignments::{AssignmentStore, ShiftTypeIndex};
use super::drafts::DraftBook;
use super::ports::{AssignmentsGateway, EmployeeDirectory, ShiftTypeCatalog};
use crate::export::{project_export, ExportTables, SpreadsheetSink};
use crate::scheduling::{ScheduleRequestDraft, SchedulingEngine};

/// Session-scoped roster state plus the ports it is refreshed through.
pub struct RosterService {
    directory: Arc<dyn EmployeeDirectory>,
    catalog: Arc<dyn ShiftTypeCatalog>,
    gateway: Arc<dyn AssignmentsGateway>,
    engine: Arc<dyn SchedulingEngine>,
    employees: Vec<Employee>,
    shift_types: ShiftTypeIndex,
    store: AssignmentStore,
    drafts: DraftBook,
    warnings: Vec<String>,
}

impl RosterService {
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        catalog: Arc<dyn ShiftTypeCatalog>,
        gateway: Arc<dyn AssignmentsGateway>,
        engine: Arc<dyn SchedulingEngine>,
    ) -> Self {
        Self {
            directory,
            catalog,
            gateway,
            engine,
            employees: Vec::new(),
            shift_types: ShiftTypeIndex::default(),
            store: AssignmentStore::new(),
            drafts: DraftBook::new(),
            warnings: Vec::new(),
        }
    }

    /// Refresh employees, shift types, and the month's assignments together.
    ///
    /// All three fetches complete before any state is touched, so a failed
    /// reload leaves the session exactly as it was. The draft merge keeps
    /// dirty drafts untouched (see [`DraftBook::merge`]).
    pub async fn reload(&mut self, month: MonthToken) -> Result<()> {
        let (employees, shift_types, assignments) = tokio::try_join!(
            self.directory.list_employees(),
            self.catalog.list_shift_types(),
            self.gateway.list_assignments(month),
        )?;

        debug!(
            %month,
            employees = employees.len(),
            shift_types = shift_types.len(),
            assignments = assignments.len(),
            "reload snapshot fetched"
        );

        self.drafts.merge(&employees);
        self.employees = employees;
        self.shift_types = ShiftTypeIndex::from_list(shift_types);
        self.store.replace_all(assignments);
        Ok(())
    }

    /// Set or clear one cell: authoritative remote write first, then the
    /// optimistic local cache update.
    pub async fn set_cell(
        &mut self,
        employee_id: EmployeeId,
        day: NaiveDate,
        shift_type_id: Option<ShiftTypeId>,
    ) -> Result<()> {
        self.gateway.upsert_assignment(employee_id, day, shift_type_id).await?;
        self.store.upsert(employee_id, day, shift_type_id, &self.shift_types);
        Ok(())
    }

    /// Create an employee remotely, then reload to pick up the new roster.
    pub async fn create_employee(&mut self, month: MonthToken, new: NewEmployee) -> Result<Employee> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(RosterError::InvalidInput("employee name must not be empty".into()));
        }
        let created = self.directory.create_employee(new.normalized()).await?;
        info!(employee_id = created.id, "employee created");
        self.reload(month).await?;
        Ok(created)
    }

    /// Toggle an employee's active flag remotely, then reload.
    pub async fn set_employee_active(
        &mut self,
        month: MonthToken,
        id: EmployeeId,
        active: bool,
    ) -> Result<()> {
        let patch = EmployeePatch { active: Some(active), ..EmployeePatch::default() };
        self.directory.patch_employee(id, patch).await?;
        self.reload(month).await
    }

    /// Apply a field edit to an employee's draft, marking it dirty.
    pub fn edit_draft(
        &mut self,
        id: EmployeeId,
        apply: impl FnOnce(&mut EmployeeDraft),
    ) -> Result<()> {
        self.drafts.edit(id, apply).map(|_| ())
    }

    /// Save a dirty draft to the remote store.
    ///
    /// The draft transitions to clean immediately after the remote write
    /// succeeds, before the confirmation reload, so an in-flight reload
    /// cannot clobber it. On failure the draft keeps its edits and stays
    /// dirty.
    pub async fn save_draft(&mut self, month: MonthToken, id: EmployeeId) -> Result<()> {
        let draft = self
            .drafts
            .get(id)
            .ok_or_else(|| RosterError::NotFound(format!("no draft for employee {id}")))?
            .clone();

        let special = draft.special_requirements.trim();
        let patch = EmployeePatch {
            max_work_days_per_month: Some(draft.max_work_days_per_month),
            max_consecutive_work_days: Some(draft.max_consecutive_work_days),
            can_work_night: Some(draft.night_only || draft.can_work_night),
            night_only: Some(draft.night_only),
            special_requirements: Some(
                (!special.is_empty()).then(|| special.to_string()),
            ),
            ..EmployeePatch::default()
        };

        self.directory.patch_employee(id, patch).await?;
        self.drafts.mark_saved(id);
        self.reload(month).await
    }

    /// Run the external auto-scheduler and reload the authoritative result.
    ///
    /// Warnings are surfaced verbatim; the generation response never mutates
    /// the assignment store directly since it carries no per-cell data.
    pub async fn auto_generate(
        &mut self,
        month: MonthToken,
        draft: &ScheduleRequestDraft,
    ) -> Result<GenerateOutcome> {
        let request = draft.build()?;
        let outcome = self.engine.generate(month, request).await?;
        if !outcome.warnings.is_empty() {
            warn!(%month, warnings = outcome.warnings.len(), "auto-generate raised warnings");
        }
        self.warnings = outcome.warnings.clone();
        self.reload(month).await?;
        Ok(outcome)
    }

    /// Fill unassigned cells with the off shift, then reload.
    pub async fn fill_off(&mut self, month: MonthToken, active_only: bool) -> Result<FillOffOutcome> {
        let outcome = self.engine.fill_off(month, active_only).await?;
        self.warnings = outcome.warnings.clone();
        self.reload(month).await?;
        Ok(outcome)
    }

    /// Project the current state into export tables; mutates nothing.
    pub fn export_tables(&self, month: MonthToken, calendar: &HolidayCalendar) -> ExportTables {
        project_export(month, calendar, &self.employees, &self.shift_types, &self.store)
    }

    /// Project and emit the export through a spreadsheet sink.
    pub fn export_to(
        &self,
        sink: &dyn SpreadsheetSink,
        month: MonthToken,
        calendar: &HolidayCalendar,
    ) -> Result<PathBuf> {
        sink.emit(month, &self.export_tables(month, calendar))
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn shift_types(&self) -> &ShiftTypeIndex {
        &self.shift_types
    }

    pub fn assignments(&self) -> &AssignmentStore {
        &self.store
    }

    pub fn drafts(&self) -> &DraftBook {
        &self.drafts
    }

    /// Warnings surfaced by the most recent engine call.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
