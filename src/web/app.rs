use super::{MAX_REQUEST_BODY_BYTES, SharedState, handlers};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{IntoMakeService, delete, get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::Level;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::serve_index))
        // Screenshot management endpoints
        .route("/screenshots", get(handlers::list_screenshots))
        .route(
            "/screenshots/batch-delete",
            post(handlers::batch_delete_screenshots),
        )
        .route("/screenshots/{filename}", delete(handlers::delete_screenshot))
        .route("/stats", get(handlers::get_stats))
        .route("/shutdown", post(handlers::shutdown))
        // Thumbnail previews
        .route("/images/{filename}", get(handlers::serve_image))
        // Apply a layer to limit the maximum size of request bodies
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        // The front end may be served from elsewhere during development
        .layer(CorsLayer::permissive())
        // Add tracing for HTTP requests and responses
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)))
        // Provide the shared state
        .with_state(state)
}

pub fn create_app(state: SharedState) -> IntoMakeService<Router> {
    create_router(state).into_make_service()
}
