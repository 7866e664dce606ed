//! Form page and classification handlers

use axum::extract::{Multipart, State};
use axum::response::Html;
use application::TextExtractorExt;
use domain::{ContentType, EmailText};
use tracing::{instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::templates::IndexPage;

const WARN_EMPTY: &str = "Please paste the email text or upload a valid .txt or .pdf file.";
const WARN_BAD_EXTENSION: &str = "File type not allowed. Upload a .txt or .pdf file.";
const WARN_UPLOAD_FAILED: &str = "Something went wrong while processing the uploaded file.";

/// Render the empty form
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_index(&IndexPage::default())?))
}

/// One submitted form, drained out of the multipart stream
#[derive(Debug, Default)]
struct SubmittedForm {
    text: String,
    file: Option<(String, Vec<u8>)>,
}

async fn read_form(mut multipart: Multipart) -> Result<SubmittedForm, ApiError> {
    let mut form = SubmittedForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "email_text" => {
                form.text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            },
            "email_file" => {
                // Browsers send the file part with an empty filename when
                // nothing was selected; that is not an upload.
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                if !filename.is_empty() {
                    form.file = Some((filename, bytes.to_vec()));
                }
            },
            _ => {},
        }
    }

    Ok(form)
}

/// Handle a classification submission
///
/// Typed text wins; the uploaded file is consulted only when the text
/// field is blank. Input errors re-render the form with a warning and are
/// never classified or audited.
#[instrument(skip(state, multipart))]
pub async fn classify(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(error) => {
            warn!(%error, "failed to read the submitted form");
            return warning_page(&state, WARN_UPLOAD_FAILED);
        },
    };

    let mut text = form.text.trim().to_string();

    if text.is_empty() {
        if let Some((filename, bytes)) = form.file {
            let Ok(content_type) = ContentType::from_filename(&filename) else {
                return warning_page(&state, WARN_BAD_EXTENSION);
            };

            let stored = match state.uploads.save(&filename, &bytes).await {
                Ok(stored) => stored,
                Err(error) => {
                    warn!(%error, "failed to store upload");
                    return warning_page(&state, WARN_UPLOAD_FAILED);
                },
            };

            text = state
                .extractor
                .extract_or_empty(&stored.path, content_type)
                .await;
        }
    }

    let email = EmailText::new(text);
    if email.is_blank() {
        return warning_page(&state, WARN_EMPTY);
    }

    let classification = state.classifier.classify(&email).await;

    let html = state.templates.render_index(&IndexPage {
        warning: None,
        result: Some(&classification),
        text: email.as_str(),
    })?;
    Ok(Html(html))
}

fn warning_page(state: &AppState, warning: &str) -> Result<Html<String>, ApiError> {
    let html = state.templates.render_index(&IndexPage {
        warning: Some(warning),
        ..Default::default()
    })?;
    Ok(Html(html))
}
