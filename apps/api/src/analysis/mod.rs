// Resume analysis: multipart extraction, the analyzer seam, and POST /analyze.

pub mod analyzer;
pub mod handlers;
pub mod upload;
