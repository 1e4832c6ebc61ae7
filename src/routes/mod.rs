use crate::error::ApiError;
use actix_web::web;

/// # Greeting Endpoint
///
/// ## Response
///
/// - **200 OK**: `{ "message": "Hello World" }`
pub mod root;

/// # Status Check Endpoints
///
/// Records that a client reported in and lists the recorded check-ins.
///
/// ## Routes
/// - `POST /status`: body `{ "client_name": string }`, returns the stored record
/// - `GET /status`: returns up to 1000 stored records
///
/// ## Failure Responses
/// - **422 Unprocessable Entity**: malformed request body
/// - **503 Service Unavailable**: `{ "detail": "Database not available" }`
/// - **500 Internal Server Error**: `{ "detail": "Internal server error" }`
pub mod status;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path and installs the JSON
/// extractor configuration that turns malformed bodies into
/// `422 Unprocessable Entity` responses.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/        - Greeting
/// POST /api/status  - Record a status check
/// GET  /api/status  - List status checks
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(root::configure_routes)
            .configure(status::configure_routes),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}
