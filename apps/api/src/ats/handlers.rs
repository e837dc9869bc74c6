//! Axum route handlers for ATS scoring and skill insights.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ats::insights::{compute_skill_insights, SkillInsights};
use crate::ats::matcher::AtsReport;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub detected_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub detected: Vec<String>,
    pub missing: Vec<String>,
}

/// POST /api/v1/ats/score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    payload: Result<Json<ResumeTextRequest>, JsonRejection>,
) -> Result<Json<AtsReport>, AppError> {
    let Json(request) = payload?;
    Ok(Json(state.matcher.score(request.resume_text.as_deref())))
}

/// POST /api/v1/skills/insights
pub async fn handle_skill_insights(
    State(state): State<AppState>,
    payload: Result<Json<ResumeTextRequest>, JsonRejection>,
) -> Result<Json<SkillInsights>, AppError> {
    let Json(request) = payload?;
    Ok(Json(compute_skill_insights(
        &state.matcher,
        request.resume_text.as_deref(),
    )))
}

/// POST /api/v1/skills/gaps
///
/// Compares analysis labels (e.g. `detected_skills` from `/analyze`) with the
/// reference keywords.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    payload: Result<Json<SkillGapRequest>, JsonRejection>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let Json(request) = payload?;
    let missing = state.matcher.gaps(&request.detected_skills);
    let detected = state
        .matcher
        .keywords()
        .iter()
        .filter(|kw| !missing.contains(kw))
        .cloned()
        .collect();

    Ok(Json(SkillGapResponse { detected, missing }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::build_router;
    use crate::test_support::{json_request, send, test_state};

    #[tokio::test]
    async fn test_score_endpoint_example() {
        let request = json_request(
            "POST",
            "/api/v1/ats/score",
            json!({ "resume_text": "I know React and Git" }),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ats_score": 29,
                "matched": ["react", "git"],
                "missing": ["html", "css", "javascript", "api", "sql"]
            })
        );
    }

    #[tokio::test]
    async fn test_score_endpoint_null_text() {
        let request = json_request("POST", "/api/v1/ats/score", json!({ "resume_text": null }));
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ats_score"], 0);
        assert_eq!(body["matched"], json!([]));
        assert_eq!(body["missing"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_score_endpoint_missing_field_defaults_to_absent() {
        let request = json_request("POST", "/api/v1/ats/score", json!({}));
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ats_score"], 0);
    }

    #[tokio::test]
    async fn test_score_endpoint_rejects_wrong_type() {
        let request = json_request("POST", "/api/v1/ats/score", json!({ "resume_text": 42 }));
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_insights_endpoint() {
        let request = json_request(
            "POST",
            "/api/v1/skills/insights",
            json!({ "resume_text": "HTML, CSS and JavaScript" }),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_resume"], true);
        assert_eq!(body["detected_count"], 3);
        assert_eq!(body["gap_count"], 4);
        assert_eq!(body["career_score"], 43);
        assert_eq!(body["readiness"][0], json!({ "label": "Technical Readiness", "value": 30 }));
    }

    #[tokio::test]
    async fn test_gaps_from_mock_analysis_labels() {
        let request = json_request(
            "POST",
            "/api/v1/skills/gaps",
            json!({ "detected_skills": ["HTML", "CSS", "JavaScript", "React", "Git"] }),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "detected": ["html", "css", "javascript", "react", "git"],
                "missing": ["api", "sql"]
            })
        );
    }

    #[tokio::test]
    async fn test_gaps_requires_detected_skills() {
        let request = json_request("POST", "/api/v1/skills/gaps", json!({}));
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
