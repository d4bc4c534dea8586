// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{content, social, titles},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .route("/api/v1/titles", get(titles::list_titles))
        .route(
            "/api/v1/titles/by-slug/{slug}",
            get(titles::get_title_by_slug),
        )
        .route("/api/v1/titles/{id}", get(titles::get_title))
        .route("/api/v1/titles/{id}/content", get(content::list_content))
        .route("/api/v1/social-links", get(social::list_social_links))
        .route("/api/v1/admin/titles", post(titles::create_title))
        .route(
            "/api/v1/admin/titles/{id}",
            put(titles::update_title).delete(titles::delete_title),
        )
        .route(
            "/api/v1/admin/titles/{id}/content",
            post(content::create_content),
        )
        .route(
            "/api/v1/admin/titles/{id}/content/{session}/{ordinal}",
            put(content::update_content).delete(content::delete_content),
        )
        .route(
            "/api/v1/admin/social-links/{platform}",
            put(social::update_social_link),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
