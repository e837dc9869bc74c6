// Keyword-based ATS scoring and the skill insights derived from it.

pub mod handlers;
pub mod insights;
pub mod matcher;
