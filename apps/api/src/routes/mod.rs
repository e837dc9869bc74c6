pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::ats::handlers::{handle_ats_score, handle_skill_gaps, handle_skill_insights};
use crate::resources::handlers::{handle_category_resources, handle_list_resources};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume upload, kept at the path the browser client posts to
        .route("/analyze", post(handle_analyze).layer(upload_limit))
        // Keyword scoring
        .route("/api/v1/ats/score", post(handle_ats_score))
        .route("/api/v1/skills/insights", post(handle_skill_insights))
        .route("/api/v1/skills/gaps", post(handle_skill_gaps))
        // Learning resources
        .route("/api/v1/resources", get(handle_list_resources))
        .route(
            "/api/v1/resources/:category",
            get(handle_category_resources),
        )
        .with_state(state)
}
