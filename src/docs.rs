use crate::api::employee::{CreateEmployee, EmployeeListResponse, EmployeeQuery};
use crate::api::leave_request::{ApplyLeave, LeaveFilter, LeaveListResponse};
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management System API",
        version = "1.0.0",
        description = r#"
## Leave Management System (LMS)

This API tracks employees and their leave requests, enforcing eligibility
and balance rules through an approval workflow.

### 🔹 Key Features
- **Employee Management**
  - Create, list, and view employee records with their leave balance
- **Leave Management**
  - Apply for leave, approve/reject requests, and view leave history

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints
- Validation failures carry a stable `code` (`invalid-range`,
  `predates-joining`, `overlap`, `insufficient-balance`, `wrong-state`)

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::apply_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
    ),
    components(
        schemas(
            ApplyLeave,
            LeaveFilter,
            LeaveRequest,
            LeaveStatus,
            LeaveListResponse,
            CreateEmployee,
            EmployeeQuery,
            Employee,
            EmployeeListResponse
        )
    ),
    tags(
        (name = "Leave", description = "Leave management APIs"),
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
