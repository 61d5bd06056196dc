use std::sync::LazyLock;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use frame_core::uploader::LANGUAGE_REQUIRED_MESSAGE;
use frame_core::{
    BannerLanguage, MediaError, BANNER_LANGUAGE_HEADER, DOWNLOAD_FILENAME, MAX_UPLOAD_MB,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

const PROCESS_FAILED_MESSAGE: &str = "Failed to process image.";
const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large.";

const INDEX_TEMPLATE: &str = include_str!("../static/index.html");

/// frame_core の定数を埋め込んだアップロード画面
static INDEX_HTML: LazyLock<String> = LazyLock::new(render_index);

fn render_index() -> String {
    let options: String = BannerLanguage::ALL
        .iter()
        .map(|lang| format!(r#"<option value="{lang}">{lang}</option>"#))
        .collect();

    INDEX_TEMPLATE
        .replace("{{LANGUAGE_OPTIONS}}", &options)
        .replace("{{MAX_UPLOAD_MB}}", &MAX_UPLOAD_MB.to_string())
        .replace("{{DOWNLOAD_FILENAME}}", DOWNLOAD_FILENAME)
        .replace("{{LANGUAGE_REQUIRED_MESSAGE}}", LANGUAGE_REQUIRED_MESSAGE)
}

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// data URL 形式の写真
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    /// data URL 形式の合成済み PNG
    pub image: String,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML.as_str())
}

pub async fn process_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let Json(request) = payload?;

    // ヘッダが無い・未知の言語は English のフレームを使う
    let language = BannerLanguage::from_header(
        headers
            .get(BANNER_LANGUAGE_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    tracing::info!(
        language = %language,
        upload_len = request.image.len(),
        "processing image"
    );

    let image =
        crate::transform::frame_data_url(&request.image, &state.config.assets_dir, language)
            .await?;

    Ok(Json(ProcessResponse { image }))
}

#[derive(Debug)]
pub enum AppError {
    PayloadTooLarge,
    ProcessFailed,
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match &err {
            MediaError::DataUrl(e) => tracing::warn!(error = %e, "invalid data url"),
            MediaError::Asset(e) => tracing::error!(error = %e, "frame asset unavailable"),
            MediaError::Transform(e) => tracing::error!(error = %e, "image processing failed"),
        }
        AppError::ProcessFailed
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::warn!("request body exceeds limit");
            AppError::PayloadTooLarge
        } else {
            tracing::warn!(error = %rejection.body_text(), "invalid request body");
            AppError::ProcessFailed
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, BODY_TOO_LARGE_MESSAGE),
            AppError::ProcessFailed => (StatusCode::INTERNAL_SERVER_ERROR, PROCESS_FAILED_MESSAGE),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
