//! Skill insights and career readiness derived from an `AtsReport`.
//!
//! Every readiness figure is a linear function of the detected-skill count,
//! capped at 100.

use serde::Serialize;

use crate::ats::matcher::{AtsReport, KeywordMatcher};

/// Readiness labels and their points per detected skill.
const READINESS_WEIGHTS: [(&str, u32); 3] = [
    ("Technical Readiness", 10),
    ("Core Fundamentals", 8),
    ("Role Alignment", 12),
];

/// Points per detected skill for the "average skill match" figure.
const SKILL_MATCH_WEIGHT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessMetric {
    pub label: &'static str,
    pub value: u32, // 0 – 100
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillInsights {
    pub has_resume: bool,
    pub detected_count: u32,
    pub gap_count: u32,
    pub total_checked: u32,
    pub career_score: u32,
    pub avg_skill_match: u32,
    pub target_role_readiness: u32,
    pub readiness: Vec<ReadinessMetric>,
}

/// Scores `resume_text` and derives the insight figures.
/// Blank or absent text yields all-zero insights with `has_resume = false`.
pub fn compute_skill_insights(matcher: &KeywordMatcher, resume_text: Option<&str>) -> SkillInsights {
    match resume_text.filter(|t| !t.trim().is_empty()) {
        Some(text) => insights_from_report(&matcher.score(Some(text))),
        None => empty_insights(),
    }
}

pub fn insights_from_report(report: &AtsReport) -> SkillInsights {
    let detected = report.matched.len() as u32;

    SkillInsights {
        has_resume: true,
        detected_count: detected,
        gap_count: report.missing.len() as u32,
        total_checked: (report.matched.len() + report.missing.len()) as u32,
        career_score: report.ats_score,
        avg_skill_match: scaled(detected, SKILL_MATCH_WEIGHT),
        target_role_readiness: report.ats_score,
        readiness: readiness_metrics(detected),
    }
}

fn empty_insights() -> SkillInsights {
    SkillInsights {
        has_resume: false,
        detected_count: 0,
        gap_count: 0,
        total_checked: 0,
        career_score: 0,
        avg_skill_match: 0,
        target_role_readiness: 0,
        readiness: readiness_metrics(0),
    }
}

fn readiness_metrics(detected: u32) -> Vec<ReadinessMetric> {
    READINESS_WEIGHTS
        .iter()
        .map(|&(label, weight)| ReadinessMetric {
            label,
            value: scaled(detected, weight),
        })
        .collect()
}

fn scaled(count: u32, weight: u32) -> u32 {
    count.saturating_mul(weight).min(100)
}
