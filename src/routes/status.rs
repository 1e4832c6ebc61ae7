use crate::error::{ApiError, ErrorResponse};
use crate::models::status_check::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;
use actix_web::{HttpResponse, get, post, web};

/// Most records a single listing returns.
pub const LIST_LIMIT: i64 = 1000;

/// # Record Status Check
///
/// Validates the body, stamps it with a fresh id and the current time and
/// persists it.
///
/// ## Responses
/// - **200 OK**: the stored [`StatusCheck`]
/// - **422 Unprocessable Entity**: `client_name` missing or not a string
/// - **503 Service Unavailable**: no database connection
/// - **500 Internal Server Error**: the insert failed
///
/// ## Example Request
/// ```json
/// { "client_name": "alice" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
#[post("/status")]
pub async fn create_status_check(
    state: web::Data<AppState>,
    input: web::Json<StatusCheckCreate>,
) -> Result<HttpResponse, ApiError> {
    let store = state.store()?;

    let status_check = StatusCheck::from(input.into_inner());
    store
        .insert(&status_check)
        .await
        .map_err(ApiError::Internal)?;

    tracing::debug!(id = %status_check.id, "Recorded status check");
    Ok(HttpResponse::Ok().json(status_check))
}

/// # List Status Checks
///
/// Returns up to [`LIST_LIMIT`] records in the database's natural order.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored status checks", body = Vec<StatusCheck>),
        (status = 503, description = "Database not available", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
#[get("/status")]
pub async fn list_status_checks(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let store = state.store()?;

    let mut status_checks = store.list(LIST_LIMIT).await.map_err(ApiError::Internal)?;
    status_checks.truncate(LIST_LIMIT as usize);

    Ok(HttpResponse::Ok().json(status_checks))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_status_check).service(list_status_checks);
}
