use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Workflow status of a leave request. Approved and Rejected are terminal;
/// transitions happen only through the policy engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Pending and Approved requests hold their dates against new
    /// applications; Rejected ones free them.
    pub fn holds_dates(&self) -> bool {
        matches!(self, LeaveStatus::Pending | LeaveStatus::Approved)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2024-03-05", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    /// Inclusive day count, computed once when the request is created.
    #[schema(example = 5)]
    pub days: i64,

    #[schema(example = "PENDING")]
    pub status: LeaveStatus,

    #[schema(example = "Family vacation", nullable = true)]
    pub reason: Option<String>,

    #[schema(example = "2024-02-20T09:30:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,

    #[schema(example = "2024-02-20T09:30:00Z", value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

/// A validated application the store has not yet assigned an id or
/// timestamps to. Produced only by the policy engine.
#[derive(Debug, Clone)]
pub struct LeaveDraft {
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub status: LeaveStatus,
    pub reason: Option<String>,
}
