use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::errors::TransformError;

/// 合成結果を PNG にエンコードする
///
/// PNG はロスレスなので品質は常に最大。無圧縮（stored）でフィルタなし。
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        &mut buf,
        CompressionType::Uncompressed,
        FilterType::NoFilter,
    );

    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("PNG encode failed: {e}")))?;

    Ok(buf)
}
