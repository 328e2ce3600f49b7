use super::protocol::*;
use super::registry::MembershipRegistry;
use super::types::{Member, MembershipError};

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::{
    Extension, Json,
    extract::Path,
    http::{Method, StatusCode, Uri},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Wrapper around `MembershipError` that renders `{"error": ...}` for Axum.
#[derive(Debug)]
pub struct ApiError(pub MembershipError);

impl From<MembershipError> for ApiError {
    fn from(err: MembershipError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (self.0.status_code(), Json(body)).into_response()
    }
}

// Anything other than a well-typed JSON object counts as an empty body, so
// the caller gets the operation's own validation message. Serde would
// otherwise accept an array as a positional struct.
fn body_or_default<T>(body: Result<Json<Value>, JsonRejection>) -> T
where
    T: Default + DeserializeOwned,
{
    let value = match body {
        Ok(Json(value @ Value::Object(_))) => value,
        Ok(Json(other)) => {
            tracing::warn!("Ignoring non-object request body: {}", other);
            return T::default();
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable request body: {}", e);
            return T::default();
        }
    };

    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!("Ignoring mistyped request body: {}", e);
        T::default()
    })
}

pub async fn handle_register(
    Extension(registry): Extension<Arc<MembershipRegistry>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let req: RegisterRequest = body_or_default(body);

    let member = registry
        .register(
            req.name.unwrap_or_default(),
            req.email.unwrap_or_default(),
            req.start_date.unwrap_or_default(),
        )
        .inspect_err(|e| tracing::warn!("Registration rejected: {}", e))?;

    Ok((
        StatusCode::CREATED,
        Json(MemberResponse::new(MSG_REGISTERED, member)),
    ))
}

pub async fn handle_get_member(
    Extension(registry): Extension<Arc<MembershipRegistry>>,
    Path(email): Path<String>,
) -> Result<Json<Member>, ApiError> {
    let member = registry.get_by_email(&email)?;
    Ok(Json(member))
}

pub async fn handle_list_active(
    Extension(registry): Extension<Arc<MembershipRegistry>>,
) -> Json<Vec<Member>> {
    let active = registry.list_active();
    tracing::debug!("Listing {} active members", active.len());
    Json(active)
}

pub async fn handle_update_start_date(
    Extension(registry): Extension<Arc<MembershipRegistry>>,
    Path(email): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MemberResponse>, ApiError> {
    let req: UpdateStartDateRequest = body_or_default(body);

    let member = registry
        .update_start_date(&email, req.new_start_date.unwrap_or_default())
        .inspect_err(|e| tracing::warn!("Start date update for {} rejected: {}", email, e))?;

    Ok(Json(MemberResponse::new(MSG_START_DATE_UPDATED, member)))
}

pub async fn handle_cancel(
    Extension(registry): Extension<Arc<MembershipRegistry>>,
    Path(email): Path<String>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = registry
        .cancel(&email)
        .inspect_err(|e| tracing::warn!("Cancellation for {} rejected: {}", email, e))?;

    Ok(Json(MemberResponse::new(MSG_CANCELED, member)))
}

/// Fallback for unknown paths, so every error keeps the `{"error": ...}` shape.
pub async fn handle_not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!("No route for {} {}", method, uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: MSG_ROUTE_NOT_FOUND.to_string(),
        }),
    )
}
