use std::str::FromStr;

use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::Error;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::service::LeaveService;

#[derive(Deserialize, ToSchema)]
pub struct ApplyLeave {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2024-03-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-03-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Family vacation", nullable = true)]
    pub reason: Option<String>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Filter by employee ID
    #[schema(example = 1)]
    pub employee_id: Option<u64>,
    /// Filter by leave status
    #[schema(example = "PENDING")]
    pub status: Option<String>,
    /// Pagination page number (start with 1)
    #[schema(example = 1)]
    pub page: Option<u64>,
    /// Pagination per page number
    #[schema(example = 10)]
    pub per_page: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 1)]
    pub total: i64,
}

/* =========================
Apply for leave
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = ApplyLeave,
        description = "Leave application payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted", body = LeaveRequest),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "message": "Overlapping with an existing leave request",
            "code": "overlap"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    service: web::Data<LeaveService>,
    payload: web::Json<ApplyLeave>,
) -> Result<HttpResponse, Error> {
    let payload = payload.into_inner();
    let request = service.apply_leave(
        payload.employee_id,
        payload.start_date,
        payload.end_date,
        payload.reason,
    )?;
    Ok(HttpResponse::Ok().json(request))
}

/* =========================
Approve leave
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/approve",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved", body = Object, example = json!({
            "message": "Leave approved",
            "leave_balance": 15
        })),
        (status = 400, description = "Wrong state or insufficient balance", body = Object, example = json!({
            "message": "Leave already approved",
            "code": "wrong-state"
        })),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, Error> {
    let leave_id = path.into_inner();
    let (request, employee) = service.approve_leave(leave_id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave approved",
        "data": request,
        "leave_balance": employee.leave_balance
    })))
}

/* =========================
Reject leave
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/reject",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Wrong state", body = Object, example = json!({
            "message": "Cannot reject an approved leave",
            "code": "wrong-state"
        })),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, Error> {
    let leave_id = path.into_inner();
    let request = service.reject_leave(leave_id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave rejected",
        "data": request
    })))
}

/// for getting a leave application details endpoint
#[utoipa::path(
    get,
    path = "/api/v1/leave/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, Error> {
    let request = service.leave(path.into_inner())?;
    Ok(HttpResponse::Ok().json(request))
}

/// for getting leave applications endpoint
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Paginated leave list", body = LeaveListResponse),
        (status = 400, description = "Bad status filter")
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    service: web::Data<LeaveService>,
    query: web::Query<LeaveFilter>,
) -> Result<HttpResponse, Error> {
    let per_page = query.per_page.unwrap_or(10).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = ((page - 1) * per_page) as usize;

    let status = match query.status.as_deref() {
        Some(raw) => match LeaveStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(_) => {
                return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                    "message": "Invalid status filter. Allowed: PENDING, APPROVED, REJECTED"
                })));
            }
        },
        None => None,
    };

    let mut leaves = match query.employee_id {
        Some(employee_id) => service.leaves_for_employee(employee_id)?,
        None => service.leaves()?,
    };
    if let Some(status) = status {
        leaves.retain(|l| l.status == status);
    }
    leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = leaves.len() as i64;
    let data: Vec<LeaveRequest> = leaves
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        data,
        page: page as u32,
        per_page: per_page as u32,
        total,
    }))
}
