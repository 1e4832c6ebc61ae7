use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served by Swagger UI.
///
/// # Endpoints
/// - Greeting: `GET /api/`
/// - Status checks: `POST /api/status`, `GET /api/status`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
    ),
    components(
        schemas(
            crate::models::greeting::Greeting,
            crate::models::status_check::StatusCheck,
            crate::models::status_check::StatusCheckCreate,
            crate::error::ErrorResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Service liveness greeting"),
        (name = "Status Checks", description = "Record and list client check-ins")
    ),
    info(
        description = "Records client status checks in MongoDB",
        title = "Status Check API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/"));
        let status = doc
            .paths
            .paths
            .get("/api/status")
            .expect("status path should be documented");
        assert!(status.get.is_some());
        assert!(status.post.is_some());
    }
}
