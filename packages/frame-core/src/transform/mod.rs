pub mod composite;
pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod orientation;
pub mod params;
pub mod resize;

pub use composite::{overlay_frame, Composite};
pub use decode::{decode_image, decode_with_format};
pub use dimensions::{bottom_anchor_offset, calculate_cover_crop, calculate_width_fit, CropBox};
pub use encode::encode_png;
pub use orientation::{auto_orient, read_orientation, Orientation};
pub use params::ComposeParams;
pub use resize::{resize_cover, resize_to_width};

use crate::errors::TransformError;
use crate::validation::validate_compose_params;

/// 写真にバナーフレームを合成して PNG バイト列を返す
///
/// 1. 写真をデコードし EXIF Orientation で正立させる
/// 2. Cover モードで `params` のサイズに切り出す
/// 3. フレームを写真の幅に合わせてリサイズする
/// 4. 透明キャンバスに写真を左上、フレームを下端に重ねる
/// 5. PNG にエンコードする
pub fn compose_banner(
    photo: &[u8],
    frame: &[u8],
    params: &ComposeParams,
) -> Result<Vec<u8>, TransformError> {
    validate_compose_params(params)?;

    let img = decode_image(photo)?;
    let img = auto_orient(img, photo);
    let (src_w, src_h) = (img.width(), img.height());

    let cropped = resize_cover(&img, params.width, params.height)?;

    let frame_img = decode_image(frame)?;
    let frame_resized = resize_to_width(&frame_img, cropped.width())?;

    let composite = overlay_frame(&cropped, &frame_resized)?;
    tracing::debug!(
        src_w,
        src_h,
        frame_w = frame_resized.width(),
        frame_h = frame_resized.height(),
        frame_top = composite.frame_top,
        "composited banner"
    );

    encode_png(&composite.image)
}
