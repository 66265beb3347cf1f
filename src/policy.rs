//! Decision functions for the leave request lifecycle.
//!
//! Every function here works on already-loaded entities and returns either an
//! accepted mutation or a typed rejection. Nothing in this module touches
//! storage; the service layer loads records, calls in, and persists whatever
//! comes back.

use chrono::NaiveDate;

use crate::error::{LmsResult, ValidationError};
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveDraft, LeaveRequest, LeaveStatus};
use crate::utils::dates::{dates_overlap, inclusive_days};

/// Validates a new application against the employee's joining date, balance
/// and existing requests. Checks run in order; the first failure wins.
///
/// The balance check here is advisory: nothing is reserved at apply time,
/// approval re-checks against the balance of that moment.
pub fn evaluate_application(
    employee: &Employee,
    existing: &[LeaveRequest],
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: Option<String>,
) -> LmsResult<LeaveDraft> {
    if end_date < start_date {
        return Err(ValidationError::InvalidRange.into());
    }
    if start_date < employee.joining_date {
        return Err(ValidationError::PredatesJoining.into());
    }
    for request in existing {
        if request.status.holds_dates()
            && dates_overlap(start_date, end_date, request.start_date, request.end_date)
        {
            return Err(ValidationError::Overlap.into());
        }
    }
    let days = inclusive_days(start_date, end_date);
    if days > employee.leave_balance {
        return Err(ValidationError::InsufficientBalance {
            requested: days,
            available: employee.leave_balance,
        }
        .into());
    }
    Ok(LeaveDraft {
        employee_id: employee.id,
        start_date,
        end_date,
        days,
        status: LeaveStatus::Pending,
        reason,
    })
}

/// Approves a pending request, deducting its days from the employee's
/// balance. Returns updated copies of both records; the caller must persist
/// them together.
///
/// The balance is re-checked here because other approvals may have landed
/// since the request was applied for.
pub fn evaluate_approval(
    request: &LeaveRequest,
    employee: &Employee,
) -> LmsResult<(LeaveRequest, Employee)> {
    match request.status {
        LeaveStatus::Approved => return Err(ValidationError::AlreadyApproved.into()),
        LeaveStatus::Rejected => return Err(ValidationError::RejectedIsTerminal.into()),
        LeaveStatus::Pending => {}
    }
    if request.days > employee.leave_balance {
        return Err(ValidationError::InsufficientBalance {
            requested: request.days,
            available: employee.leave_balance,
        }
        .into());
    }
    let mut request = request.clone();
    let mut employee = employee.clone();
    employee.leave_balance -= request.days;
    request.status = LeaveStatus::Approved;
    Ok((request, employee))
}

/// Rejects a pending request. No balance change; there is no revoke path for
/// an approved request.
pub fn evaluate_rejection(request: &LeaveRequest) -> LmsResult<LeaveRequest> {
    match request.status {
        LeaveStatus::Rejected => return Err(ValidationError::AlreadyRejected.into()),
        LeaveStatus::Approved => return Err(ValidationError::ApprovedIsTerminal.into()),
        LeaveStatus::Pending => {}
    }
    let mut request = request.clone();
    request.status = LeaveStatus::Rejected;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(balance: i64) -> Employee {
        Employee {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            department: "Engineering".to_string(),
            joining_date: date(2024, 1, 1),
            leave_balance: balance,
        }
    }

    fn request(status: LeaveStatus, start: NaiveDate, end: NaiveDate) -> LeaveRequest {
        let stamp = Utc.with_ymd_and_hms(2024, 2, 20, 9, 30, 0).unwrap();
        LeaveRequest {
            id: 1,
            employee_id: 1,
            start_date: start,
            end_date: end,
            days: inclusive_days(start, end),
            status,
            reason: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn validation(result: Result<LeaveDraft, Error>) -> ValidationError {
        match result {
            Err(Error::Validation(reason)) => reason,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn accepted_application_is_pending_with_computed_days() {
        let draft = evaluate_application(
            &employee(20),
            &[],
            date(2024, 3, 1),
            date(2024, 3, 5),
            Some("Family vacation".to_string()),
        )
        .unwrap();
        assert_eq!(draft.status, LeaveStatus::Pending);
        assert_eq!(draft.days, 5);
        assert_eq!(draft.employee_id, 1);
    }

    #[test]
    fn reversed_range_rejects_before_anything_else() {
        // balance of zero and a pre-joining start would also fail, but the
        // range check wins
        let mut emp = employee(0);
        emp.joining_date = date(2024, 6, 1);
        let reason = validation(evaluate_application(
            &emp,
            &[],
            date(2024, 3, 5),
            date(2024, 3, 1),
            None,
        ));
        assert_eq!(reason, ValidationError::InvalidRange);
    }

    #[test]
    fn leave_cannot_start_before_joining() {
        let reason = validation(evaluate_application(
            &employee(20),
            &[],
            date(2023, 12, 30),
            date(2024, 1, 2),
            None,
        ));
        assert_eq!(reason, ValidationError::PredatesJoining);
    }

    #[test]
    fn pending_and_approved_requests_block_overlap() {
        for status in [LeaveStatus::Pending, LeaveStatus::Approved] {
            let existing = [request(status, date(2024, 3, 1), date(2024, 3, 5))];
            let reason = validation(evaluate_application(
                &employee(20),
                &existing,
                date(2024, 3, 3),
                date(2024, 3, 4),
                None,
            ));
            assert_eq!(reason, ValidationError::Overlap);
        }
    }

    #[test]
    fn rejected_request_does_not_block_overlap() {
        let existing = [request(LeaveStatus::Rejected, date(2024, 3, 1), date(2024, 3, 5))];
        let draft = evaluate_application(
            &employee(20),
            &existing,
            date(2024, 3, 3),
            date(2024, 3, 4),
            None,
        )
        .unwrap();
        assert_eq!(draft.days, 2);
    }

    #[test]
    fn overlap_wins_over_balance() {
        // 5 requested days against a balance of 2, but the overlap check
        // comes first
        let existing = [request(LeaveStatus::Pending, date(2024, 3, 1), date(2024, 3, 5))];
        let reason = validation(evaluate_application(
            &employee(2),
            &existing,
            date(2024, 3, 5),
            date(2024, 3, 9),
            None,
        ));
        assert_eq!(reason, ValidationError::Overlap);
    }

    #[test]
    fn application_exceeding_balance_rejects() {
        let reason = validation(evaluate_application(
            &employee(15),
            &[],
            date(2024, 4, 1),
            date(2024, 4, 20),
            None,
        ));
        assert_eq!(
            reason,
            ValidationError::InsufficientBalance {
                requested: 20,
                available: 15
            }
        );
    }

    #[test]
    fn application_never_touches_balance() {
        let emp = employee(20);
        evaluate_application(&emp, &[], date(2024, 3, 1), date(2024, 3, 5), None).unwrap();
        assert_eq!(emp.leave_balance, 20);
    }

    #[test]
    fn approval_deducts_days_and_flips_status() {
        let emp = employee(20);
        let pending = request(LeaveStatus::Pending, date(2024, 3, 1), date(2024, 3, 5));
        let (approved, updated) = evaluate_approval(&pending, &emp).unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(updated.leave_balance, 15);
    }

    #[test]
    fn approving_twice_fails_the_second_time() {
        let emp = employee(20);
        let pending = request(LeaveStatus::Pending, date(2024, 3, 1), date(2024, 3, 5));
        let (approved, updated) = evaluate_approval(&pending, &emp).unwrap();
        let err = evaluate_approval(&approved, &updated).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::AlreadyApproved));
        // deducted exactly once
        assert_eq!(updated.leave_balance, 15);
    }

    #[test]
    fn approval_recheck_gates_on_current_balance() {
        // passed the soft check at apply time, but the balance has shifted
        let pending = request(LeaveStatus::Pending, date(2024, 4, 1), date(2024, 4, 10));
        let err = evaluate_approval(&pending, &employee(5)).unwrap_err();
        assert_eq!(
            err,
            Error::Validation(ValidationError::InsufficientBalance {
                requested: 10,
                available: 5
            })
        );
    }

    #[test]
    fn rejected_request_cannot_be_approved() {
        let rejected = request(LeaveStatus::Rejected, date(2024, 3, 1), date(2024, 3, 5));
        let err = evaluate_approval(&rejected, &employee(20)).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::RejectedIsTerminal));
    }

    #[test]
    fn rejection_flips_status_only() {
        let pending = request(LeaveStatus::Pending, date(2024, 3, 1), date(2024, 3, 5));
        let rejected = evaluate_rejection(&pending).unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.days, pending.days);
    }

    #[test]
    fn rejecting_twice_fails_the_second_time() {
        let rejected = request(LeaveStatus::Rejected, date(2024, 3, 1), date(2024, 3, 5));
        let err = evaluate_rejection(&rejected).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::AlreadyRejected));
    }

    #[test]
    fn approved_request_cannot_be_rejected() {
        let approved = request(LeaveStatus::Approved, date(2024, 3, 1), date(2024, 3, 5));
        let err = evaluate_rejection(&approved).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::ApprovedIsTerminal));
    }
}
