// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{describe_upload_handler, describe_url_handler, metrics_handler, not_found_handler};
use super::middleware::{cors_layer, request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::error::Result;
use crate::openai::VisionClient;
use axum::extract::DefaultBodyLimit;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub vision_client: Arc<dyn VisionClient>,
}

pub fn create_router(config: AppConfig, vision_client: Arc<dyn VisionClient>) -> Result<Router> {
    let metrics_enabled = config.metrics.enabled;

    let state = AppState {
        config: Arc::new(config),
        vision_client,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut router = Router::new().route(
        "/",
        get(describe_url_handler)
            .post(describe_upload_handler)
            .fallback(not_found_handler),
    );

    if metrics_enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    let app = router
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(not_found_handler)
        // Uploads are bounded field by field against upload_limit in the handler
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
