use serde::{Deserialize, Serialize};

/// Resume analysis returned by `POST /analyze`.
/// Produced per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0 – 100
    pub ats_score: u32,
    pub detected_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}
