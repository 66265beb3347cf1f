use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "joining_date": "2024-01-01",
        "leave_balance": 20
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2024-01-01",
        value_type = String,
        format = "date"
    )]
    pub joining_date: NaiveDate,

    /// Remaining eligible leave days. Reduced only when a request is approved.
    #[schema(example = 20)]
    pub leave_balance: i64,
}

/// Employee attributes before the store has assigned an id.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub joining_date: NaiveDate,
    pub leave_balance: i64,
}
