use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::Error;
use crate::model::employee::Employee;
use crate::service::LeaveService;

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub joining_date: NaiveDate,
    /// Initial leave balance; defaults to the configured value when omitted.
    #[schema(example = 20, nullable = true)]
    pub leave_balance: Option<u32>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct EmployeeQuery {
    /// Pagination page number (start with 1)
    #[schema(example = 1)]
    pub page: Option<u32>,
    /// Pagination per page number
    #[schema(example = 20)]
    pub per_page: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 1)]
    pub total: i64,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created successfully", body = Employee),
        (status = 409, description = "Email already in use", body = Object, example = json!({
            "message": "Employee with this email already exists"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<LeaveService>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, Error> {
    let payload = payload.into_inner();
    let employee = service.create_employee(
        payload.name,
        payload.email,
        payload.department,
        payload.joining_date,
        payload.leave_balance.map(i64::from),
    )?;
    Ok(HttpResponse::Ok().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Paginated employee list", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<LeaveService>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, Error> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
    let offset = ((page - 1) * per_page) as usize;

    let mut employees = service.employees()?;
    employees.sort_by(|a, b| b.id.cmp(&a.id));
    let total = employees.len() as i64;
    let data: Vec<Employee> = employees
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        data,
        page,
        per_page,
        total,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/v1/employee/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, Error> {
    let employee = service.employee(path.into_inner())?;
    Ok(HttpResponse::Ok().json(employee))
}
