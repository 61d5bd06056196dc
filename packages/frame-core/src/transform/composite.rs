use image::{Rgba, RgbaImage};

use crate::errors::TransformError;
use crate::transform::dimensions::bottom_anchor_offset;

/// 写真とフレームを重ねた合成結果
#[derive(Debug)]
pub struct Composite {
    pub image: RgbaImage,
    /// フレームを置いた縦方向の位置
    pub frame_top: u32,
}

/// 透明なキャンバスに写真を左上、フレームを下端に重ねる
///
/// キャンバスは写真と同じサイズ。フレームはアルファ合成される。
pub fn overlay_frame(photo: &RgbaImage, frame: &RgbaImage) -> Result<Composite, TransformError> {
    let (canvas_w, canvas_h) = photo.dimensions();
    let frame_top = bottom_anchor_offset(canvas_h, frame.height()).ok_or(
        TransformError::FrameTooTall {
            frame_height: frame.height(),
            canvas_height: canvas_h,
        },
    )?;

    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, Rgba([0, 0, 0, 0]));
    overlay_over(&mut canvas, photo, 0, 0);
    overlay_over(&mut canvas, frame, 0, frame_top);

    Ok(Composite {
        image: canvas,
        frame_top,
    })
}

/// `top` を `(x, y)` に source-over で重ねる。キャンバス外ははみ出し分を捨てる
fn overlay_over(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    let width = top.width().min(canvas.width().saturating_sub(x));
    let height = top.height().min(canvas.height().saturating_sub(y));

    for ty in 0..height {
        for tx in 0..width {
            let dst = canvas.get_pixel_mut(x + tx, y + ty);
            *dst = blend_over(*dst, *top.get_pixel(tx, ty));
        }
    }
}

/// Porter-Duff source-over（非乗算アルファ、整数演算で丸める）
///
/// 出力アルファは `a_src + a_dst * (1 - a_src)`。不透明な下地の上では常に 255。
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_a = u32::from(src.0[3]);
    let dst_a = u32::from(dst.0[3]);

    match src_a {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    // 255 * 255 スケールのアルファ
    let src_w = src_a * 255;
    let dst_w = dst_a * (255 - src_a);
    let out_a = src_w + dst_w;

    let channel = |i: usize| {
        let num = u32::from(src.0[i]) * src_w + u32::from(dst.0[i]) * dst_w;
        ((num + out_a / 2) / out_a) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        ((out_a + 127) / 255) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn test_frame_anchored_at_bottom() {
        let photo = RgbaImage::from_pixel(100, 100, BLUE);
        let frame = RgbaImage::from_pixel(100, 30, Rgba([255, 0, 0, 255]));

        let composite = overlay_frame(&photo, &frame).unwrap();
        assert_eq!(composite.frame_top, 70);
        assert_eq!(composite.image.dimensions(), (100, 100));
        assert_eq!(*composite.image.get_pixel(50, 69), BLUE);
        assert_eq!(composite.image.get_pixel(50, 70).0, [255, 0, 0, 255]);
        assert_eq!(composite.image.get_pixel(0, 99).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_transparent_frame_keeps_photo() {
        let photo = RgbaImage::from_pixel(20, 20, BLUE);
        let frame = RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 0]));

        let composite = overlay_frame(&photo, &frame).unwrap();
        assert!(composite.image.pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn test_semi_transparent_frame_blends() {
        let photo = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let frame = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 128]));

        let composite = overlay_frame(&photo, &frame).unwrap();
        let pixel = composite.image.get_pixel(5, 5);
        assert_eq!(pixel.0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_blend_over_opaque_base_stays_opaque() {
        let base = Rgba([10, 200, 30, 255]);
        for alpha in 0..=255u8 {
            let out = blend_over(base, Rgba([250, 5, 90, alpha]));
            assert_eq!(out.0[3], 255, "alpha {alpha}");
        }
    }

    #[test]
    fn test_blend_over_transparent_base_keeps_source() {
        let src = Rgba([200, 100, 50, 77]);
        assert_eq!(blend_over(Rgba([0, 0, 0, 0]), src), src);
    }

    #[test]
    fn test_blend_over_translucent_layers() {
        // 50% + 50% → 75%
        let out = blend_over(Rgba([0, 0, 255, 128]), Rgba([255, 0, 0, 128]));
        assert_eq!(out.0[3], 192);
        // 色は上側の寄与が大きい
        assert!(out.0[0] > out.0[2], "{out:?}");
    }

    #[test]
    fn test_overlay_over_clips_to_canvas() {
        let mut canvas = RgbaImage::new(4, 4);
        let top = RgbaImage::from_pixel(3, 3, BLUE);
        overlay_over(&mut canvas, &top, 2, 2);

        assert_eq!(*canvas.get_pixel(3, 3), BLUE);
        assert_eq!(canvas.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_frame_taller_than_canvas() {
        let photo = RgbaImage::new(10, 10);
        let frame = RgbaImage::new(10, 11);

        assert!(matches!(
            overlay_frame(&photo, &frame),
            Err(TransformError::FrameTooTall {
                frame_height: 11,
                canvas_height: 10
            })
        ));
    }
}
