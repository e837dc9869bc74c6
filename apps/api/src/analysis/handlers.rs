//! Axum route handler for resume analysis.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{debug, info};

use crate::analysis::upload::extract_resume;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

fn no_file() -> AppError {
    AppError::Validation("No file uploaded".to_string())
}

/// POST /analyze
///
/// Accepts a multipart body with a `resume` file part and returns the
/// analyzer's result. A request without that part (including a body that is
/// not multipart at all) is a 400.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!("Analyze request is not multipart: {rejection}");
        no_file()
    })?;

    let upload = extract_resume(&mut multipart).await?.ok_or_else(no_file)?;
    info!(
        file_name = %upload.file_name,
        content_type = ?upload.content_type,
        size_bytes = upload.size(),
        backend = state.analyzer.backend(),
        "Analyzing resume"
    );

    let analysis = state.analyzer.analyze(&upload).await?;
    Ok(Json(analysis))
}
