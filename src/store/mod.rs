//! Storage contracts consumed by the service layer. One authoritative
//! implementation lives in [`memory`]; the policy engine never sees these
//! traits, it only works on loaded records.

pub mod memory;

use crate::error::LmsResult;
use crate::model::employee::{Employee, NewEmployee};
use crate::model::leave_request::{LeaveDraft, LeaveRequest};

pub trait EmployeeStore: Send + Sync {
    /// Assigns an id and persists the record. Fails with
    /// [`crate::error::Error::DuplicateEmail`] if the email is taken;
    /// email uniqueness is this boundary's job, not the policy engine's.
    fn create(&self, new: NewEmployee) -> LmsResult<Employee>;

    fn get_by_id(&self, id: u64) -> LmsResult<Option<Employee>>;

    fn get_by_email(&self, email: &str) -> LmsResult<Option<Employee>>;

    fn list(&self) -> LmsResult<Vec<Employee>>;

    /// Persists an in-place mutation of an existing record.
    fn save(&self, employee: &Employee) -> LmsResult<()>;
}

pub trait LeaveRequestStore: Send + Sync {
    /// Assigns an id and timestamps and persists the draft.
    fn create(&self, draft: LeaveDraft) -> LmsResult<LeaveRequest>;

    fn get_by_id(&self, id: u64) -> LmsResult<Option<LeaveRequest>>;

    /// All requests for one employee, in no particular order.
    fn list_by_employee(&self, employee_id: u64) -> LmsResult<Vec<LeaveRequest>>;

    fn list(&self) -> LmsResult<Vec<LeaveRequest>>;

    /// Persists an updated request, refreshing its `updated_at`.
    fn save(&self, request: &LeaveRequest) -> LmsResult<()>;
}
