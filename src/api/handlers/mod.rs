use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use super::AppState;
use crate::assembly::{self, SectionPlan};
use crate::content::{self, ContentSnapshot};
use crate::render::{SITE_CSS, SITE_JS};

// ============================================================
// Page and assets
// ============================================================

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.site.index_html.clone())
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SITE_JS,
    )
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Content
// ============================================================

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub content: ContentSnapshot,
}

pub async fn content(State(state): State<AppState>) -> Json<ContentResponse> {
    Json(ContentResponse {
        generated_at: state.site.generated_at,
        content: content::snapshot(),
    })
}

pub async fn sections() -> Json<Vec<SectionPlan>> {
    Json(assembly::page_plan())
}

// ============================================================
// Contact
// ============================================================

/// The contact form has no delivery backend. Say so instead of
/// accepting the message and dropping it.
pub async fn contact(body: Bytes) -> (StatusCode, Json<serde_json::Value>) {
    tracing::warn!(bytes = body.len(), "contact submission rejected: no backend");
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(serde_json::json!({
            "error": content::school::CONTACT_FORM_NOTICE,
            "status": StatusCode::NOT_IMPLEMENTED.as_u16(),
        })),
    )
}
