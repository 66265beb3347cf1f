//! The authoritative record store. Both record sets live behind one lock so
//! every store operation is itself consistent; cross-operation sequences are
//! serialized per employee by the service layer.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::error::{Error, LmsResult};
use crate::model::employee::{Employee, NewEmployee};
use crate::model::leave_request::{LeaveDraft, LeaveRequest};
use crate::store::{EmployeeStore, LeaveRequestStore};

#[derive(Default)]
struct State {
    employees: HashMap<u64, Employee>,
    leaves: HashMap<u64, LeaveRequest>,
    next_employee_id: u64,
    next_leave_id: u64,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl EmployeeStore for MemoryStore {
    fn create(&self, new: NewEmployee) -> LmsResult<Employee> {
        let mut state = self.write();
        if state.employees.values().any(|e| e.email == new.email) {
            return Err(Error::DuplicateEmail);
        }
        state.next_employee_id += 1;
        let employee = Employee {
            id: state.next_employee_id,
            name: new.name,
            email: new.email,
            department: new.department,
            joining_date: new.joining_date,
            leave_balance: new.leave_balance,
        };
        state.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn get_by_id(&self, id: u64) -> LmsResult<Option<Employee>> {
        Ok(self.read().employees.get(&id).cloned())
    }

    fn get_by_email(&self, email: &str) -> LmsResult<Option<Employee>> {
        Ok(self
            .read()
            .employees
            .values()
            .find(|e| e.email == email)
            .cloned())
    }

    fn list(&self) -> LmsResult<Vec<Employee>> {
        Ok(self.read().employees.values().cloned().collect())
    }

    fn save(&self, employee: &Employee) -> LmsResult<()> {
        let mut state = self.write();
        let slot = state
            .employees
            .get_mut(&employee.id)
            .ok_or(Error::EmployeeNotFound)?;
        *slot = employee.clone();
        Ok(())
    }
}

impl LeaveRequestStore for MemoryStore {
    fn create(&self, draft: LeaveDraft) -> LmsResult<LeaveRequest> {
        let mut state = self.write();
        state.next_leave_id += 1;
        let now = Utc::now();
        let request = LeaveRequest {
            id: state.next_leave_id,
            employee_id: draft.employee_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            days: draft.days,
            status: draft.status,
            reason: draft.reason,
            created_at: now,
            updated_at: now,
        };
        state.leaves.insert(request.id, request.clone());
        Ok(request)
    }

    fn get_by_id(&self, id: u64) -> LmsResult<Option<LeaveRequest>> {
        Ok(self.read().leaves.get(&id).cloned())
    }

    fn list_by_employee(&self, employee_id: u64) -> LmsResult<Vec<LeaveRequest>> {
        Ok(self
            .read()
            .leaves
            .values()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn list(&self) -> LmsResult<Vec<LeaveRequest>> {
        Ok(self.read().leaves.values().cloned().collect())
    }

    fn save(&self, request: &LeaveRequest) -> LmsResult<()> {
        let mut state = self.write();
        let slot = state
            .leaves
            .get_mut(&request.id)
            .ok_or(Error::LeaveNotFound)?;
        *slot = request.clone();
        slot.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::leave_request::LeaveStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_employee(email: &str) -> NewEmployee {
        NewEmployee {
            name: "John Doe".to_string(),
            email: email.to_string(),
            department: "Engineering".to_string(),
            joining_date: date(2024, 1, 1),
            leave_balance: 20,
        }
    }

    fn draft(employee_id: u64) -> LeaveDraft {
        LeaveDraft {
            employee_id,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 5),
            days: 5,
            status: LeaveStatus::Pending,
            reason: None,
        }
    }

    #[test]
    fn ids_are_assigned_sequentially() {
        let store = MemoryStore::new();
        let first = EmployeeStore::create(&store, new_employee("a@company.com")).unwrap();
        let second = EmployeeStore::create(&store, new_employee("b@company.com")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn duplicate_email_conflicts() {
        let store = MemoryStore::new();
        EmployeeStore::create(&store, new_employee("john@company.com")).unwrap();
        let err = EmployeeStore::create(&store, new_employee("john@company.com")).unwrap_err();
        assert_eq!(err, Error::DuplicateEmail);
    }

    #[test]
    fn lookup_by_email() {
        let store = MemoryStore::new();
        let created = EmployeeStore::create(&store, new_employee("john@company.com")).unwrap();
        let found = store.get_by_email("john@company.com").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.get_by_email("nobody@company.com").unwrap().is_none());
    }

    #[test]
    fn save_rejects_unknown_employee() {
        let store = MemoryStore::new();
        let mut employee = EmployeeStore::create(&store, new_employee("a@company.com")).unwrap();
        employee.id = 42;
        assert_eq!(
            EmployeeStore::save(&store, &employee).unwrap_err(),
            Error::EmployeeNotFound
        );
    }

    #[test]
    fn leave_create_stamps_timestamps() {
        let store = MemoryStore::new();
        let employee = EmployeeStore::create(&store, new_employee("a@company.com")).unwrap();
        let request = LeaveRequestStore::create(&store, draft(employee.id)).unwrap();
        assert_eq!(request.id, 1);
        assert_eq!(request.created_at, request.updated_at);
    }

    #[test]
    fn leave_save_refreshes_updated_at() {
        let store = MemoryStore::new();
        let employee = EmployeeStore::create(&store, new_employee("a@company.com")).unwrap();
        let mut request = LeaveRequestStore::create(&store, draft(employee.id)).unwrap();
        request.status = LeaveStatus::Approved;
        LeaveRequestStore::save(&store, &request).unwrap();
        let stored = LeaveRequestStore::get_by_id(&store, request.id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, LeaveStatus::Approved);
        assert!(stored.updated_at >= stored.created_at);
    }

    #[test]
    fn list_by_employee_filters_ownership() {
        let store = MemoryStore::new();
        let a = EmployeeStore::create(&store, new_employee("a@company.com")).unwrap();
        let b = EmployeeStore::create(&store, new_employee("b@company.com")).unwrap();
        LeaveRequestStore::create(&store, draft(a.id)).unwrap();
        LeaveRequestStore::create(&store, draft(a.id)).unwrap();
        LeaveRequestStore::create(&store, draft(b.id)).unwrap();
        assert_eq!(store.list_by_employee(a.id).unwrap().len(), 2);
        assert_eq!(store.list_by_employee(b.id).unwrap().len(), 1);
    }
}
