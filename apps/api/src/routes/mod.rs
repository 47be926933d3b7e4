pub mod docs;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate));

    // Docs are only exposed in development.
    if state.config.environment.docs_enabled() {
        router = router
            .route("/docs", get(docs::swagger_ui_handler))
            .route("/redoc", get(docs::redoc_handler))
            .route(docs::OPENAPI_PATH, get(docs::openapi_handler));
    }

    router.with_state(state)
}
