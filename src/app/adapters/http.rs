//! HTTP upload wrapper
//!
//! `GET /` serves an upload form and `POST /qc` evaluates an uploaded log,
//! answering with the JSON report or a 400 page carrying the error message.
//! Every request evaluates its own document; only the immutable config is shared.

use crate::app::models::QcReport;
use crate::app::services::evaluator::LogEvaluator;
use crate::config::{Config, QcOptions};
use crate::constants::{DISPLAY_ERRORS_FIELD, DISPLAY_TIME_FIELD, UPLOAD_FILE_FIELD};
use crate::{Error, Result};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Content type assumed for a file part that does not declare one
const DEFAULT_PART_CONTENT_TYPE: &str = "text/plain";

#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
}

/// Fields collected from a multipart upload
#[derive(Debug, Clone, Default)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
    pub display_errors: Option<String>,
    pub display_time: Option<String>,
}

impl Upload {
    /// Report options from the raw form values
    pub fn options(&self) -> QcOptions {
        QcOptions::from_raw(self.display_errors.as_deref(), self.display_time.as_deref())
    }
}

/// Build the application router
pub fn router(config: Config) -> Router {
    let body_limit = config.max_upload_bytes();
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(upload_form))
        .route("/qc", post(evaluate_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind and serve until `shutdown` resolves
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = config.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", address), e))?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::io("HTTP server failed", e))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn upload_form() -> Html<String> {
    Html(render_upload_page(None))
}

async fn evaluate_upload(State(state): State<AppState>, multipart: Multipart) -> Response {
    match handle_upload(&state.config, multipart).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            let status = if e.is_client_error() {
                warn!("Rejected upload: {}", e);
                StatusCode::BAD_REQUEST
            } else {
                error!("Upload failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let message = format!("Error! {}", e);
            (status, Html(render_upload_page(Some(&message)))).into_response()
        }
    }
}

async fn handle_upload(config: &Config, multipart: Multipart) -> Result<QcReport> {
    let upload = read_upload(multipart).await?;
    validate_upload(config, &upload)?;

    let file_name = upload.file_name.as_deref().unwrap_or_default();
    let result = LogEvaluator::new(upload.options()).evaluate_bytes(file_name, &upload.content)?;
    Ok(result.report)
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload> {
    let mut upload = Upload::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            UPLOAD_FILE_FIELD => {
                upload.file_name = field.file_name().map(str::to_string);
                upload.content_type = field.content_type().map(str::to_string);
                upload.content = field.bytes().await.map_err(invalid_upload)?.to_vec();
            }
            DISPLAY_ERRORS_FIELD => {
                upload.display_errors = Some(field.text().await.map_err(invalid_upload)?);
            }
            DISPLAY_TIME_FIELD => {
                upload.display_time = Some(field.text().await.map_err(invalid_upload)?);
            }
            _ => {}
        }
    }

    Ok(upload)
}

fn invalid_upload(error: axum::extract::multipart::MultipartError) -> Error {
    Error::upload_validation(format!("Invalid upload: {}", error.body_text()))
}

/// Check the uploaded file before evaluating it
pub fn validate_upload(config: &Config, upload: &Upload) -> Result<()> {
    let has_file = upload
        .file_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    if !has_file {
        return Err(Error::upload_validation(
            "Please select a log file to evaluate",
        ));
    }

    let content_type = upload
        .content_type
        .as_deref()
        .unwrap_or(DEFAULT_PART_CONTENT_TYPE);
    if !config.is_content_type_allowed(content_type) {
        return Err(Error::upload_validation(format!(
            "Content type {} is not supported",
            content_type
        )));
    }

    Ok(())
}

/// Render the upload page, optionally with a message
pub fn render_upload_page(message: Option<&str>) -> String {
    let message_html = message
        .map(|m| format!("    <p class=\"message\">{}</p>\n", escape_html(m)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Sensor QC</title>
  </head>
  <body>
    <h1>Sensor calibration log QC</h1>
{message_html}    <form action="/qc" method="post" enctype="multipart/form-data">
      <p><input type="file" name="{file}"></p>
      <p><label><input type="checkbox" name="{errors}" value="true"> Display sensor errors</label></p>
      <p><label><input type="checkbox" name="{time}" value="true"> Display processing time</label></p>
      <p><input type="submit" value="Evaluate"></p>
    </form>
  </body>
</html>
"#,
        file = UPLOAD_FILE_FIELD,
        errors = DISPLAY_ERRORS_FIELD,
        time = DISPLAY_TIME_FIELD,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
