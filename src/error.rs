use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the stores, the policy engine and the service layer.
/// All of them are recoverable by the caller; the `ResponseError` impl maps
/// each kind to a user-visible JSON response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Leave request not found")]
    LeaveNotFound,

    #[error("Employee with this email already exists")]
    DuplicateEmail,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reasons the policy engine can refuse an application or a transition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("End date is before start date")]
    InvalidRange,

    #[error("Cannot apply leave before joining date")]
    PredatesJoining,

    #[error("Overlapping with an existing leave request")]
    Overlap,

    #[error("Requested {requested} days exceed available balance of {available}")]
    InsufficientBalance { requested: i64, available: i64 },

    #[error("Leave already approved")]
    AlreadyApproved,

    #[error("Leave already rejected")]
    AlreadyRejected,

    #[error("Cannot approve a rejected leave")]
    RejectedIsTerminal,

    #[error("Cannot reject an approved leave")]
    ApprovedIsTerminal,
}

impl ValidationError {
    /// Stable machine-readable reason code carried in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidRange => "invalid-range",
            ValidationError::PredatesJoining => "predates-joining",
            ValidationError::Overlap => "overlap",
            ValidationError::InsufficientBalance { .. } => "insufficient-balance",
            ValidationError::AlreadyApproved
            | ValidationError::AlreadyRejected
            | ValidationError::RejectedIsTerminal
            | ValidationError::ApprovedIsTerminal => "wrong-state",
        }
    }
}

pub type LmsResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::EmployeeNotFound | Error::LeaveNotFound => StatusCode::NOT_FOUND,
            Error::DuplicateEmail => StatusCode::CONFLICT,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Error::Validation(reason) => json!({
                "message": self.to_string(),
                "code": reason.code(),
            }),
            _ => json!({ "message": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
