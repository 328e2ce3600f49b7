use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// A single gym membership.
///
/// `email` identifies the record and never changes after registration.
/// Cancellation only flips `is_active`; records are never removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub email: String,
    pub start_date: String,
    pub is_active: bool,
}

impl Member {
    pub fn new(name: String, email: String, start_date: String) -> Self {
        Self {
            name,
            email,
            start_date,
            is_active: true,
        }
    }
}

/// Errors returned by registry operations.
///
/// The `Display` text is sent to clients verbatim as the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MembershipError {
    #[error("Name, email, and start date are required.")]
    FieldsRequired,

    #[error("New start date is required.")]
    StartDateRequired,

    #[error("Membership already exists for this email.")]
    Duplicate,

    #[error("No membership found for this email.")]
    NotFound,
}

impl MembershipError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MembershipError::FieldsRequired
            | MembershipError::StartDateRequired
            | MembershipError::Duplicate => StatusCode::BAD_REQUEST,
            MembershipError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}
