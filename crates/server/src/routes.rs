use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::ApiMessage;

pub mod user;

async fn welcome() -> Json<ApiMessage> {
    Json(ApiMessage::new(
        "Hello World!!! Welcome to the Bender's ToDo List - API.",
    ))
}

async fn endpoint_not_found() -> (StatusCode, Json<ApiMessage>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiMessage::new("Sorry, this endpoint does not exist.")),
    )
}

/// Build the application router: welcome route, registration endpoint and a
/// 404 fallback, wrapped in CORS and request tracing.
pub fn build_router(cors: CorsLayer, state: user::ServerState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/user", post(user::create_user))
        .fallback(endpoint_not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
