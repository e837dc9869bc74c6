//! Resume analyzer — pluggable, trait-based backend behind `POST /analyze`.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`. The only backend is
//! `MockAnalyzer`, a stand-in that returns a fixed analysis.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::upload::ResumeUpload;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching the handler.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, upload: &ResumeUpload) -> Result<AnalysisResult, AppError>;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MockAnalyzer — fixed placeholder backend
// ────────────────────────────────────────────────────────────────────────────

/// Placeholder analyzer. It intentionally does NOT parse the uploaded
/// document: every upload, whatever its bytes, gets `mock_analysis()`.
pub struct MockAnalyzer;

#[async_trait]
impl ResumeAnalyzer for MockAnalyzer {
    async fn analyze(&self, upload: &ResumeUpload) -> Result<AnalysisResult, AppError> {
        info!(
            "Mock analyzer handling '{}' without reading its contents",
            upload.file_name
        );
        Ok(mock_analysis())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed mock result
// ────────────────────────────────────────────────────────────────────────────

/// The fixed analysis returned for every upload.
pub fn mock_analysis() -> AnalysisResult {
    AnalysisResult {
        ats_score: 72,
        detected_skills: to_strings(&["HTML", "CSS", "JavaScript", "React", "Git"]),
        strengths: to_strings(&[
            "Good frontend development knowledge",
            "Relevant modern technologies detected",
            "Resume structure looks clean",
        ]),
        weaknesses: to_strings(&[
            "No SQL skills detected",
            "No backend technologies mentioned",
            "Projects lack measurable metrics",
        ]),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
