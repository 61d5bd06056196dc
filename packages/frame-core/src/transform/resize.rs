use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, RgbaImage};

use crate::errors::TransformError;
use crate::transform::dimensions::{calculate_cover_crop, calculate_width_fit};

/// 画像を Cover モードで指定サイズに収める
///
/// 中央を切り出してから Lanczos3 でリサンプルする。拡大も行う。
pub fn resize_cover(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<RgbaImage, TransformError> {
    let crop = calculate_cover_crop(img.width(), img.height(), target_w, target_h);
    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .crop(crop.left, crop.top, crop.width, crop.height);

    resize_rgba(img, target_w, target_h, &options)
}

/// 幅を合わせてアスペクト比を維持したままリサイズする
pub fn resize_to_width(img: &DynamicImage, target_w: u32) -> Result<RgbaImage, TransformError> {
    let (dst_w, dst_h) = calculate_width_fit(img.width(), img.height(), target_w);
    let options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));

    resize_rgba(img, dst_w, dst_h, &options)
}

/// RGBA8 で fast_image_resize に渡してリサイズする
///
/// アルファは Resizer 内部で乗算・除算されるため、半透明の縁が黒ずまない。
fn resize_rgba(
    img: &DynamicImage,
    dst_w: u32,
    dst_h: u32,
    options: &ResizeOptions,
) -> Result<RgbaImage, TransformError> {
    if dst_w == 0 || dst_h == 0 {
        return Err(TransformError::ProcessingFailed(format!(
            "invalid target size {dst_w}x{dst_h}"
        )));
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let src_image = Image::from_vec_u8(width, height, rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    let mut dst_image = Image::new(dst_w, dst_h, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, options)
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    RgbaImage::from_raw(dst_w, dst_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn test_resize_cover_landscape() {
        let img = DynamicImage::new_rgb8(300, 100);
        let resized = resize_cover(&img, 50, 50).unwrap();
        assert_eq!(resized.dimensions(), (50, 50));
    }

    #[test]
    fn test_resize_cover_upscales() {
        let img = DynamicImage::new_rgb8(20, 40);
        let resized = resize_cover(&img, 100, 100).unwrap();
        assert_eq!(resized.dimensions(), (100, 100));
    }

    #[test]
    fn test_resize_cover_discards_sides() {
        // 左右 1/3 が赤、中央が青の横長画像 → 中央だけが残る
        let img = RgbImage::from_fn(90, 30, |x, _| {
            if (30..60).contains(&x) {
                Rgb([0, 0, 255])
            } else {
                Rgb([255, 0, 0])
            }
        });
        let resized = resize_cover(&DynamicImage::ImageRgb8(img), 30, 30).unwrap();
        let center = resized.get_pixel(15, 15);
        assert_eq!(center.0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_resize_to_width_keeps_aspect() {
        let img = DynamicImage::new_rgba8(400, 100);
        let resized = resize_to_width(&img, 1000).unwrap();
        assert_eq!(resized.dimensions(), (1000, 250));
    }

    #[test]
    fn test_resize_keeps_transparency() {
        let img = RgbaImage::from_pixel(40, 10, Rgba([10, 20, 30, 0]));
        let resized = resize_to_width(&DynamicImage::ImageRgba8(img), 20).unwrap();
        assert!(resized.pixels().all(|p| p.0[3] == 0));
    }
}
