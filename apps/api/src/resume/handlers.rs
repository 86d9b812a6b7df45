use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract_profile_from_document;
use crate::resume::fields::ExtractedProfile;
use crate::resume::text_extractor::DocumentFormat;
use crate::state::AppState;

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {e}"))
}

/// POST /api/v1/resumes/extract
///
/// Multipart fields: `file` (required) and `format` (`pdf` | `docx`, optional;
/// detected from the file name when omitted).
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedProfile>, AppError> {
    let mut upload: Option<(Option<String>, Bytes)> = None;
    let mut format_tag: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                upload = Some((file_name, data));
            }
            Some("format") => {
                format_tag = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let format = match (format_tag.as_deref(), file_name.as_deref()) {
        (Some(tag), _) if !tag.trim().is_empty() => tag.parse::<DocumentFormat>()?,
        (_, Some(name)) => DocumentFormat::from_file_name(name)?,
        _ => {
            return Err(AppError::Validation(
                "Document format unknown: pass 'format' or upload a named file".to_string(),
            ))
        }
    };

    info!(
        "Extracting resume fields from {format} upload ({} bytes)",
        data.len()
    );

    // Document decoding and analysis are CPU-bound.
    let extractor = state.extractor.clone();
    let profile = tokio::task::spawn_blocking(move || {
        extract_profile_from_document(&extractor, &data, format)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    Ok(Json(profile))
}
