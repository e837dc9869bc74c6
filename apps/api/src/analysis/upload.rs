//! Extraction of the uploaded resume from a multipart body.
//!
//! Only presence is checked. Content, size and type are recorded for logging
//! but never validated.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl ResumeUpload {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Returns the first `resume` file part, or `None` when the body has none.
///
/// A `resume` part without a filename is a plain form value, not a file, and
/// is skipped along with every other field.
pub async fn extract_resume(multipart: &mut Multipart) -> Result<Option<ResumeUpload>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                debug!("'{RESUME_FIELD}' field carries no file; skipping");
                continue;
            }
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        return Ok(Some(ResumeUpload {
            file_name,
            content_type,
            data,
        }));
    }

    Ok(None)
}
