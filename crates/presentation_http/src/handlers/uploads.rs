//! Download handler for stored uploads

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use domain::ContentType;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Serve a stored upload as an attachment
///
/// Names that the store could not have produced (traversal attempts
/// included) are reported as not found, same as missing files.
#[instrument(skip(state))]
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let path = state
        .uploads
        .resolve(&filename)
        .map_err(|_| ApiError::NotFound(filename.clone()))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound(filename.clone()))?;

    let mime = ContentType::from_filename(&filename)
        .map_or("application/octet-stream", |ct| ct.as_mime());

    Ok((
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
