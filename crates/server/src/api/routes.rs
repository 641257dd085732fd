use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{analysis, browse, codecs, handlers, media, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Library browsing
        .route("/browse", get(browse::browse))
        .route("/video-info", get(media::video_info))
        // Codec compatibility configuration
        .route(
            "/codec-config",
            get(codecs::get_codec_config).post(codecs::update_codec_config),
        )
        .route("/available-codecs", get(codecs::available_codecs))
        // Bulk analysis
        .route("/bulk-analysis", get(analysis::bulk_analysis))
        .route(
            "/bulk-analysis/progress",
            get(analysis::bulk_analysis_progress),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
