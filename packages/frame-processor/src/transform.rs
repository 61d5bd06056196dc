use std::path::Path;

use bytes::Bytes;
use frame_core::{
    compose_banner, AssetError, BannerLanguage, ComposeParams, DataUrl, MediaError,
    TransformError,
};

/// data URL で受け取った写真にフレームを合成し、PNG の data URL を返す。
///
/// フレーム画像はリクエストごとにディスクから読み込む。
/// 合成は CPU を占有するため blocking スレッドで実行する。
pub async fn frame_data_url(
    image: &str,
    assets_dir: &Path,
    language: BannerLanguage,
) -> Result<String, MediaError> {
    let photo = DataUrl::parse(image)?;
    tracing::debug!(mime = %photo.mime, bytes = photo.data.len(), "decoded upload");

    let frame = load_frame(assets_dir, language).await?;

    let output = tokio::task::spawn_blocking(move || {
        compose_banner(&photo.data, &frame, &ComposeParams::default())
    })
    .await
    .map_err(|e| TransformError::ProcessingFailed(format!("compose task failed: {e}")))??;

    Ok(DataUrl::png(output).to_string())
}

/// 言語に対応するフレーム画像を読み込む
///
/// その言語のファイルが無い場合は English のフレームを使う。
/// English のフレームも無ければエラー。
async fn load_frame(assets_dir: &Path, language: BannerLanguage) -> Result<Bytes, AssetError> {
    match read_frame(&language.frame_path(assets_dir)).await {
        Err(AssetError::NotFound { path }) if language != BannerLanguage::English => {
            tracing::warn!(
                language = %language,
                missing = %path.display(),
                "frame asset missing, falling back to English"
            );
            read_frame(&BannerLanguage::English.frame_path(assets_dir)).await
        }
        result => result,
    }
}

/// フレーム画像を読み込む
async fn read_frame(path: &Path) -> Result<Bytes, AssetError> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(Bytes::from(data)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AssetError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(AssetError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
