use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use status_check_api::config::Settings;
use status_check_api::cors::cors_policy;
use status_check_api::openapi::ApiDoc;
use status_check_api::state::AppState;
use status_check_api::storage::mongo::MongoStatusCheckStore;
use status_check_api::telemetry::init_tracing;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Check Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Status check REST endpoints under `/api`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - CORS policy from `ALLOWED_ORIGINS`
///
/// # Endpoints
/// - Greeting: `GET /api/`
/// - Status checks: `POST /api/status`, `GET /api/status`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Startup
/// An unreachable database does not stop the server: the status endpoints
/// answer `503 Service Unavailable` until it is restarted with a reachable
/// MongoDB.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("info");

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let store = match MongoStatusCheckStore::connect(&settings.database).await {
        Ok(store) => {
            tracing::info!(database = %settings.database.name, "Successfully connected to MongoDB");
            Some(store)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to MongoDB");
            None
        }
    };

    let state = match store.clone() {
        Some(store) => AppState::new(Arc::new(store)),
        None => AppState::unavailable(),
    };
    let state = Data::new(state);
    let allowed_origins = settings.allowed_origins.clone();

    tracing::info!(host = %settings.host, port = settings.port, "Starting HTTP server");
    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(cors_policy(&allowed_origins))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(status_check_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    if let Some(store) = store {
        store.shutdown().await;
        tracing::info!("Closed MongoDB client");
    }

    Ok(())
}
