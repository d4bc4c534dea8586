// tests/support/helpers.rs
use super::mocks::{self, InMemoryContentRepo, InMemorySocialRepo, InMemoryTitleRepo};
use anidex_core::application::ports::time::Clock;
use anidex_core::application::services::ApplicationServices;
use anidex_core::domain::title::services::DEFAULT_MAX_SLUG_ATTEMPTS;
use anidex_core::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, header::AUTHORIZATION, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;

/// Services wired to in-memory repositories, with handles kept for assertions.
pub struct Harness {
    pub services: Arc<ApplicationServices>,
    pub titles: Arc<InMemoryTitleRepo>,
    pub content: Arc<InMemoryContentRepo>,
    pub social: Arc<InMemorySocialRepo>,
}

pub fn harness() -> Harness {
    harness_with(Arc::new(mocks::StepClock::default()), DEFAULT_MAX_SLUG_ATTEMPTS)
}

pub fn harness_with(clock: Arc<dyn Clock>, max_slug_attempts: u32) -> Harness {
    let titles = Arc::new(InMemoryTitleRepo::default());
    let content = Arc::new(InMemoryContentRepo::default());
    let social = Arc::new(InMemorySocialRepo::default());

    let services = Arc::new(ApplicationServices::new(
        titles.clone(),
        titles.clone(),
        content.clone(),
        social.clone(),
        mocks::test_authenticator(),
        clock,
        max_slug_attempts,
    ));

    Harness {
        services,
        titles,
        content,
        social,
    }
}

pub fn build_test_state(harness: &Harness) -> HttpState {
    HttpState {
        services: Arc::clone(&harness.services),
    }
}

pub fn make_test_router(harness: &Harness) -> axum::Router {
    build_router(build_test_state(harness), &[])
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
