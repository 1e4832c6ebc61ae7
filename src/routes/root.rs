use crate::models::greeting::Greeting;
use actix_web::{HttpResponse, Responder, get};

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Service is running", body = Greeting)
    ),
    tag = "Greeting"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(Greeting::hello_world())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_root_greeting() {
        let app = test::init_service(App::new().configure(crate::routes::configure)).await;
        let req = test::TestRequest::get().uri("/api/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Hello World" }));
    }

    #[actix_web::test]
    async fn test_root_needs_no_database() {
        // No AppState registered at all
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
