use axum::{Router, routing::post};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

pub mod handlers;
pub mod models;

pub fn create_router(static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/render", post(handlers::render_item_handler))
        .route("/api/render/list", post(handlers::render_list_handler))
        // Static file serving for the UI
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}
