pub mod db;
pub mod extractors;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;
pub mod store;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::IntoResponse,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    quiz::QuizSelector,
    rejections::AppError,
    store::{CategoryStore, QuestionStore},
};

/// Handles injected into every request. Both store handles usually point
/// at the same backing store.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryStore>,
    pub questions: Arc<dyn QuestionStore>,
    pub quiz: Arc<QuizSelector>,
}

impl AppState {
    pub fn new<S>(store: S, quiz: QuizSelector) -> Self
    where
        S: CategoryStore + QuestionStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            categories: store.clone(),
            questions: store,
            quiz: Arc::new(quiz),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(not_found)
        .layer(middleware::from_fn(json_errors))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Rewrites error responses produced by the framework itself (wrong method,
/// unparsable path) into the JSON error envelope.
async fn json_errors(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let resp = next.run(req).await;
    let status = resp.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return resp;
    }

    let is_json = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v: &HeaderValue| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if is_json {
        return resp;
    }

    AppError::from_status(status).into_response()
}
