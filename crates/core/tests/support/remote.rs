//! In-memory mock of the remote store and scheduling engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rosterline_core::roster::ports::{AssignmentsGateway, EmployeeDirectory, ShiftTypeCatalog};
use rosterline_core::SchedulingEngine;
use rosterline_domain::{
    Assignment, Employee, EmployeeId, EmployeePatch, FillOffOutcome, GenerateOutcome,
    GenerateRequest, MonthToken, NewEmployee, Result, RosterError, ShiftType, ShiftTypeId,
};

/// Mutable in-memory remote store implementing every core port.
///
/// Failure toggles simulate transport errors per operation family; recorded
/// calls let tests assert the wire traffic.
#[derive(Default)]
pub struct MockRemote {
    pub employees: Mutex<Vec<Employee>>,
    pub shift_types: Mutex<Vec<ShiftType>>,
    pub assignments: Mutex<Vec<Assignment>>,
    pub fail_lists: AtomicBool,
    pub fail_writes: AtomicBool,
    pub recorded_patches: Mutex<Vec<(EmployeeId, EmployeePatch)>>,
    pub recorded_upserts: Mutex<Vec<(EmployeeId, NaiveDate, Option<ShiftTypeId>)>>,
    pub generate_outcome: Mutex<GenerateOutcome>,
    /// Snapshot the engine "writes" remotely during generate/fill-off.
    pub engine_result: Mutex<Option<Vec<Assignment>>>,
    pub recorded_requests: Mutex<Vec<GenerateRequest>>,
    next_employee_id: Mutex<EmployeeId>,
}

impl MockRemote {
    pub fn new(
        employees: Vec<Employee>,
        shift_types: Vec<ShiftType>,
        assignments: Vec<Assignment>,
    ) -> Self {
        let next = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            employees: Mutex::new(employees),
            shift_types: Mutex::new(shift_types),
            assignments: Mutex::new(assignments),
            next_employee_id: Mutex::new(next),
            ..Self::default()
        }
    }

    fn check_lists(&self) -> Result<()> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(RosterError::Network("list endpoint unavailable".into()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RosterError::Network("write endpoint unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeDirectory for MockRemote {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.check_lists()?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee> {
        self.check_writes()?;
        let mut next_id = self.next_employee_id.lock().unwrap();
        let employee = Employee {
            id: *next_id,
            name: new.name,
            active: true,
            color: new.color,
            max_work_days_per_month: Some(new.max_work_days_per_month),
            max_consecutive_work_days: Some(new.max_consecutive_work_days),
            can_work_night: Some(new.can_work_night),
            night_only: Some(new.night_only),
            special_requirements: new.special_requirements,
        };
        *next_id += 1;
        self.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn patch_employee(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee> {
        self.check_writes()?;
        self.recorded_patches.lock().unwrap().push((id, patch.clone()));
        let mut employees = self.employees.lock().unwrap();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RosterError::NotFound(format!("employee {id}")))?;
        if let Some(name) = patch.name {
            employee.name = name;
        }
        if let Some(active) = patch.active {
            employee.active = active;
        }
        if let Some(capacity) = patch.max_work_days_per_month {
            employee.max_work_days_per_month = Some(capacity);
        }
        if let Some(max_consecutive) = patch.max_consecutive_work_days {
            employee.max_consecutive_work_days = Some(max_consecutive);
        }
        if let Some(can_night) = patch.can_work_night {
            employee.can_work_night = Some(can_night);
        }
        if let Some(night_only) = patch.night_only {
            employee.night_only = Some(night_only);
        }
        if let Some(special) = patch.special_requirements {
            employee.special_requirements = special;
        }
        Ok(employee.clone())
    }
}

#[async_trait]
impl ShiftTypeCatalog for MockRemote {
    async fn list_shift_types(&self) -> Result<Vec<ShiftType>> {
        self.check_lists()?;
        Ok(self.shift_types.lock().unwrap().clone())
    }
}

#[async_trait]
impl AssignmentsGateway for MockRemote {
    async fn list_assignments(&self, _month: MonthToken) -> Result<Vec<Assignment>> {
        self.check_lists()?;
        Ok(self.assignments.lock().unwrap().clone())
    }

    async fn upsert_assignment(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
        shift_type_id: Option<ShiftTypeId>,
    ) -> Result<()> {
        self.check_writes()?;
        self.recorded_upserts.lock().unwrap().push((employee_id, day, shift_type_id));
        let mut assignments = self.assignments.lock().unwrap();
        assignments.retain(|a| !(a.employee_id == employee_id && a.day == day));
        if let Some(shift_type_id) = shift_type_id {
            let shift = self
                .shift_types
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == shift_type_id)
                .cloned()
                .ok_or_else(|| RosterError::NotFound(format!("shift type {shift_type_id}")))?;
            assignments.push(Assignment {
                employee_id,
                day,
                shift_type_id,
                shift_code: shift.code,
                shift_name: shift.name,
                note: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SchedulingEngine for MockRemote {
    async fn generate(
        &self,
        _month: MonthToken,
        request: GenerateRequest,
    ) -> Result<GenerateOutcome> {
        self.check_writes()?;
        self.recorded_requests.lock().unwrap().push(request);
        if let Some(snapshot) = self.engine_result.lock().unwrap().take() {
            *self.assignments.lock().unwrap() = snapshot;
        }
        Ok(self.generate_outcome.lock().unwrap().clone())
    }

    async fn fill_off(&self, _month: MonthToken, _active_only: bool) -> Result<FillOffOutcome> {
        self.check_writes()?;
        if let Some(snapshot) = self.engine_result.lock().unwrap().take() {
            *self.assignments.lock().unwrap() = snapshot;
        }
        let outcome = self.generate_outcome.lock().unwrap().clone();
        Ok(FillOffOutcome { created: outcome.created, warnings: outcome.warnings })
    }
}

/// Employee fixture with explicit server-side parameter values.
pub fn employee(id: EmployeeId, name: &str, capacity: u32) -> Employee {
    Employee {
        id,
        name: name.into(),
        active: true,
        color: None,
        max_work_days_per_month: Some(capacity),
        max_consecutive_work_days: Some(6),
        can_work_night: Some(true),
        night_only: Some(false),
        special_requirements: None,
    }
}

/// Shift-type fixture.
pub fn shift_type(id: ShiftTypeId, code: &str, name: &str, is_work: bool) -> ShiftType {
    ShiftType { id, code: code.into(), name: name.into(), start_time: None, end_time: None, is_work }
}

/// Assignment fixture denormalized from the given shift type.
pub fn assignment(employee_id: EmployeeId, day: &str, shift: &ShiftType) -> Assignment {
    Assignment {
        employee_id,
        day: day.parse().unwrap(),
        shift_type_id: shift.id,
        shift_code: shift.code.clone(),
        shift_name: shift.name.clone(),
        note: None,
    }
}
