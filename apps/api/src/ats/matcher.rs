//! Keyword matcher behind the ATS score.
//!
//! Pure substring containment, case-insensitive on both sides. No stemming,
//! fuzzy matching or partial credit.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Reference keywords and report model
// ────────────────────────────────────────────────────────────────────────────

/// Reference skill keywords. Output lists keep this order.
pub const REQUIRED_SKILLS: [&str; 7] = ["html", "css", "javascript", "react", "git", "api", "sql"];

/// Result of matching one resume text against the keyword list.
/// `matched` and `missing` partition the keyword list exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsReport {
    pub ats_score: u32, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatcher
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(REQUIRED_SKILLS)
    }
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Scores `text` against the keyword list.
    /// Absent or empty text scores 0 with every keyword missing.
    pub fn score(&self, text: Option<&str>) -> AtsReport {
        let text = match text {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => {
                return AtsReport {
                    ats_score: 0,
                    matched: vec![],
                    missing: self.keywords.clone(),
                }
            }
        };

        let (matched, missing): (Vec<String>, Vec<String>) = self
            .keywords
            .iter()
            .cloned()
            .partition(|kw| text.contains(&kw.to_lowercase()));

        AtsReport {
            ats_score: percentage(matched.len(), self.keywords.len()),
            matched,
            missing,
        }
    }

    /// Keywords with no case-insensitive equal among `detected`.
    /// Used to derive skill gaps from an analysis result's labels.
    /// Case-insensitive on purpose: analysis labels are display-cased ("HTML")
    /// while the reference keywords are lowercase.
    pub fn gaps<S: AsRef<str>>(&self, detected: &[S]) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|kw| !detected.iter().any(|d| d.as_ref().eq_ignore_ascii_case(kw.as_str())))
            .cloned()
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring arithmetic
// ────────────────────────────────────────────────────────────────────────────

/// round(100 × part / whole), half rounded up. An empty whole scores 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
