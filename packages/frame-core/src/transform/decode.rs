use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;

/// バイト列から画像をデコードする
///
/// フォーマットはマジックナンバーから推測する。
/// デコード前にヘッダの寸法を確認し、巨大な画像はピクセル展開せずに拒否する。
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, TransformError> {
    let (img, _) = decode_with_format(data)?;
    Ok(img)
}

/// デコードした画像と推測された元フォーマットを返す
pub fn decode_with_format(
    data: &[u8],
) -> Result<(DynamicImage, ImageFormat), TransformError> {
    if data.is_empty() {
        return Err(TransformError::InvalidInput("empty image data".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::InvalidInput(format!("failed to guess format: {e}")))?;

    let Some(format) = reader.format() else {
        return Err(TransformError::InvalidInput(
            "unrecognized image format".to_string(),
        ));
    };

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| TransformError::InvalidInput(format!("failed to read dimensions: {e}")))?;
    validate_pixel_count(width, height)?;

    // into_dimensions がリーダーを消費するため、デコード用に作り直す
    let img = ImageReader::with_format(Cursor::new(data), format)
        .decode()
        .map_err(|e| TransformError::InvalidInput(format!("decode failed: {e}")))?;

    Ok((img, format))
}

/// 総ピクセル数を検証し、メモリ枯渇を防ぐ
fn validate_pixel_count(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
