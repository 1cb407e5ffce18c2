use axum::http::StatusCode;
use axum_test::TestServer;
use kjv_site::api::{create_router, AppState};
use serde_json::{json, Value};

fn setup() -> TestServer {
    let state = AppState::new().expect("Failed to render page");
    let app = create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

mod page {
    use super::*;

    #[tokio::test]
    async fn serves_the_rendered_page_at_root_and_index() {
        let server = setup();

        for path in ["/", "/index.html"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let html = response.text();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("id=\"home\""));
        }
    }

    #[tokio::test]
    async fn serves_assets_with_content_types() {
        let server = setup();

        let script = server.get("/assets/site.js").await;
        script.assert_status_ok();
        assert!(script
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/javascript"));
        assert!(script.text().contains("IntersectionObserver"));

        let stylesheet = server.get("/assets/site.css").await;
        stylesheet.assert_status_ok();
        assert!(stylesheet
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/css"));
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let server = setup();
        server.get("/gallery").await.assert_status(StatusCode::NOT_FOUND);
    }
}

mod api {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let server = setup();
        let response = server.get("/api/v1/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn content_returns_the_snapshot() {
        let server = setup();
        let response = server.get("/api/v1/content").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["school"]["founded"], 2000);
        assert_eq!(body["about_facts"].as_array().unwrap().len(), 6);
        assert_eq!(body["hero_stats"][0]["icon"], "calendar");
        assert!(body["generated_at"].is_string());
    }

    #[tokio::test]
    async fn sections_lists_plans_in_page_order() {
        let server = setup();
        let response = server.get("/api/v1/sections").await;
        response.assert_status_ok();

        let plans: Vec<Value> = response.json();
        assert_eq!(plans.len(), 14);
        assert_eq!(plans[0]["anchor"], "home");
        assert_eq!(plans[13]["anchor"], "footer");
        assert_eq!(plans[0]["kind"], "hero");
    }

    #[tokio::test]
    async fn contact_is_not_implemented() {
        let server = setup();
        let response = server
            .post("/api/v1/contact")
            .json(&json!({ "name": "Asha", "message": "Admission query" }))
            .await;

        response.assert_status(StatusCode::NOT_IMPLEMENTED);
        let body: Value = response.json();
        assert_eq!(body["status"], 501);
        assert!(body["error"].as_str().unwrap().contains("not accepted"));
    }
}
