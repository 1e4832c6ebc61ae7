use actix_cors::Cors;

/// Builds the cross-origin policy for the configured origin allow-list.
///
/// Credentials are allowed, any request header is accepted and methods are
/// limited to GET, POST, PUT, DELETE and OPTIONS. A `*` entry allows every
/// origin; the allowed origin is echoed back rather than sent as a wildcard.
pub fn cors_policy(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
}
