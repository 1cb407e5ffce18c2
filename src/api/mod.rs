mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::render::{self, RenderError, RenderedSite};

/// Shared, read-only server state: the page rendered once at startup.
#[derive(Clone)]
pub struct AppState {
    site: Arc<RenderedSite>,
}

impl AppState {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self::from_site(render::render_page()?))
    }

    pub fn from_site(site: RenderedSite) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/content", get(handlers::content))
        .route("/sections", get(handlers::sections))
        .route("/contact", post(handlers::contact));

    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/assets/site.js", get(handlers::script))
        .route("/assets/site.css", get(handlers::stylesheet))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
