//! Request-handling layer between the HTTP surface and the policy engine:
//! loads records, evaluates, persists the outcome.
//!
//! Balance deduction is a check-then-act sequence, so every write path runs
//! under a per-employee lock. Two approvals racing for one balance serialize
//! here; so do two applications racing for one date interval. Nothing awaits
//! while a lock is held.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{Error, LmsResult};
use crate::model::employee::{Employee, NewEmployee};
use crate::model::leave_request::LeaveRequest;
use crate::policy;
use crate::store::{EmployeeStore, LeaveRequestStore};

pub struct LeaveService {
    employees: Arc<dyn EmployeeStore>,
    leaves: Arc<dyn LeaveRequestStore>,
    locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
    default_leave_balance: i64,
}

impl LeaveService {
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        leaves: Arc<dyn LeaveRequestStore>,
        default_leave_balance: i64,
    ) -> Self {
        Self {
            employees,
            leaves,
            locks: Mutex::new(HashMap::new()),
            default_leave_balance,
        }
    }

    fn employee_lock(&self, employee_id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(employee_id).or_default().clone()
    }

    pub fn create_employee(
        &self,
        name: String,
        email: String,
        department: String,
        joining_date: NaiveDate,
        leave_balance: Option<i64>,
    ) -> LmsResult<Employee> {
        let employee = self.employees.create(NewEmployee {
            name,
            email,
            department,
            joining_date,
            leave_balance: leave_balance.unwrap_or(self.default_leave_balance),
        })?;
        info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    pub fn apply_leave(
        &self,
        employee_id: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<String>,
    ) -> LmsResult<LeaveRequest> {
        let lock = self.employee_lock(employee_id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let employee = self
            .employees
            .get_by_id(employee_id)?
            .ok_or(Error::EmployeeNotFound)?;
        let existing = self.leaves.list_by_employee(employee_id)?;
        let draft = policy::evaluate_application(&employee, &existing, start_date, end_date, reason)?;
        let request = self.leaves.create(draft)?;
        info!(
            leave_id = request.id,
            employee_id,
            days = request.days,
            "Leave request submitted"
        );
        Ok(request)
    }

    pub fn approve_leave(&self, leave_id: u64) -> LmsResult<(LeaveRequest, Employee)> {
        let owner = self
            .leaves
            .get_by_id(leave_id)?
            .ok_or(Error::LeaveNotFound)?
            .employee_id;
        let lock = self.employee_lock(owner);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        // re-load under the lock; the request may have moved state since the
        // ownership lookup
        let request = self
            .leaves
            .get_by_id(leave_id)?
            .ok_or(Error::LeaveNotFound)?;
        let employee = self
            .employees
            .get_by_id(request.employee_id)?
            .ok_or(Error::EmployeeNotFound)?;
        let (approved, employee) = policy::evaluate_approval(&request, &employee)?;
        self.leaves.save(&approved)?;
        self.employees.save(&employee)?;
        let approved = self
            .leaves
            .get_by_id(leave_id)?
            .ok_or(Error::LeaveNotFound)?;
        info!(
            leave_id,
            employee_id = employee.id,
            leave_balance = employee.leave_balance,
            "Leave approved"
        );
        Ok((approved, employee))
    }

    pub fn reject_leave(&self, leave_id: u64) -> LmsResult<LeaveRequest> {
        let owner = self
            .leaves
            .get_by_id(leave_id)?
            .ok_or(Error::LeaveNotFound)?
            .employee_id;
        let lock = self.employee_lock(owner);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let request = self
            .leaves
            .get_by_id(leave_id)?
            .ok_or(Error::LeaveNotFound)?;
        let rejected = policy::evaluate_rejection(&request)?;
        self.leaves.save(&rejected)?;
        let rejected = self
            .leaves
            .get_by_id(leave_id)?
            .ok_or(Error::LeaveNotFound)?;
        info!(leave_id, employee_id = owner, "Leave rejected");
        Ok(rejected)
    }

    pub fn employee(&self, id: u64) -> LmsResult<Employee> {
        self.employees.get_by_id(id)?.ok_or(Error::EmployeeNotFound)
    }

    pub fn employees(&self) -> LmsResult<Vec<Employee>> {
        self.employees.list()
    }

    pub fn leave(&self, id: u64) -> LmsResult<LeaveRequest> {
        self.leaves.get_by_id(id)?.ok_or(Error::LeaveNotFound)
    }

    pub fn leaves(&self) -> LmsResult<Vec<LeaveRequest>> {
        self.leaves.list()
    }

    pub fn leaves_for_employee(&self, employee_id: u64) -> LmsResult<Vec<LeaveRequest>> {
        self.leaves.list_by_employee(employee_id)
    }
}
