use std::path::PathBuf;

use thiserror::Error;

/// バナー合成処理の統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("data url error: {0}")]
    DataUrl(#[from] DataUrlError),

    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// data URL のパースエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("missing `data:` scheme")]
    MissingScheme,

    #[error("missing payload separator")]
    MissingPayload,

    #[error("only base64 payloads are supported")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// フレーム画像の読み込みエラー
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("frame asset not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read frame asset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid input image: {0}")]
    InvalidInput(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("frame height {frame_height} exceeds canvas height {canvas_height}")]
    FrameTooTall {
        frame_height: u32,
        canvas_height: u32,
    },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
