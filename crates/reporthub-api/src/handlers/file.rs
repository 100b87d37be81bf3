//! Evidence image upload handler.

use std::path::Path as FsPath;

use axum::Json;
use axum::extract::{Multipart, State};
use tracing::info;
use uuid::Uuid;

use reporthub_core::error::AppError;

use crate::dto::response::{ApiResponse, UploadResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/files/upload
///
/// Accepts a single multipart field named `file`. Only `image/*` content
/// is allowed, capped at the configured size; the file lands on local
/// disk under a generated UUID name and is served statically.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::validation("Missing file field"))?;

    if field.name() != Some("file") {
        return Err(ApiError(AppError::validation(
            "Expected a multipart field named 'file'",
        )));
    }

    let content_type = field
        .content_type()
        .map(str::to_string)
        .ok_or_else(|| AppError::validation("Missing content type"))?;
    if !content_type.starts_with("image/") {
        return Err(ApiError(AppError::validation(
            "Only image uploads are allowed",
        )));
    }

    let original_name = field.file_name().map(str::to_string);

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

    let max = state.config.upload.max_size_bytes;
    if data.len() as u64 > max {
        return Err(ApiError(AppError::validation(format!(
            "File exceeds the maximum size of {max} bytes"
        ))));
    }

    let extension = extension_for(&content_type, original_name.as_deref());
    let filename = format!("{}.{extension}", Uuid::new_v4());

    let directory = &state.config.upload.directory;
    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create upload directory: {e}")))?;

    let path = FsPath::new(directory).join(&filename);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::storage(format!("Failed to store upload: {e}")))?;

    let url = format!(
        "{}/{filename}",
        state.config.upload.public_prefix.trim_end_matches('/')
    );

    info!(filename = %filename, size = data.len(), "Image uploaded");

    Ok(Json(ApiResponse::ok(UploadResponse {
        url,
        filename,
        size: data.len() as u64,
    })))
}

/// Picks a file extension from the MIME subtype, falling back to the
/// original filename's extension, then to "bin".
fn extension_for(content_type: &str, original_name: Option<&str>) -> String {
    match content_type {
        "image/png" => "png".to_string(),
        "image/jpeg" => "jpg".to_string(),
        "image/gif" => "gif".to_string(),
        "image/webp" => "webp".to_string(),
        "image/svg+xml" => "svg".to_string(),
        _ => original_name
            .and_then(|n| n.rsplit('.').next().map(str::to_string))
            .filter(|e| !e.is_empty() && e.len() <= 8)
            .unwrap_or_else(|| "bin".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_mime_types_map_to_extensions() {
        assert_eq!(extension_for("image/png", None), "png");
        assert_eq!(extension_for("image/jpeg", Some("photo.jpeg")), "jpg");
        assert_eq!(extension_for("image/webp", None), "webp");
    }

    #[test]
    fn unknown_mime_falls_back_to_filename_then_bin() {
        assert_eq!(extension_for("image/x-exotic", Some("scan.tiff")), "tiff");
        assert_eq!(extension_for("image/x-exotic", None), "bin");
    }
}
