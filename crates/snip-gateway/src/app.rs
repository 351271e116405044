use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::decompression::RequestDecompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, create_url_json_handler, get_url_handler, health_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/", post(create_url_handler))
            .route("/api/shorten", post(create_url_json_handler))
            .route("/{id}", get(get_url_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CatchPanicLayer::new())
                    .layer(CompressionLayer::new())
                    .layer(RequestDecompressionLayer::new()),
            )
            .with_state(state)
    }
}
