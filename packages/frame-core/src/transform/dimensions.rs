/// 元画像上の切り出し領域（サブピクセル精度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Cover モードの切り出し領域を計算する
///
/// 出力のアスペクト比に合わせて元画像の中央を切り出す。
/// はみ出した部分は捨てられ、レターボックスは発生しない。
pub fn calculate_cover_crop(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> CropBox {
    let (src_w, src_h) = (src_w as f64, src_h as f64);
    let target_ratio = target_w as f64 / target_h as f64;

    if src_w / src_h > target_ratio {
        // 横に長い: 高さを使い切り、左右を落とす
        let width = src_h * target_ratio;
        CropBox {
            left: (src_w - width) / 2.0,
            top: 0.0,
            width,
            height: src_h,
        }
    } else {
        // 縦に長い（または同比率）: 幅を使い切り、上下を落とす
        let height = src_w / target_ratio;
        CropBox {
            left: 0.0,
            top: (src_h - height) / 2.0,
            width: src_w,
            height,
        }
    }
}

/// 幅を指定してアスペクト比を維持した寸法を計算する
///
/// 拡大も許可する。高さは最小 1px。
pub fn calculate_width_fit(src_w: u32, src_h: u32, target_w: u32) -> (u32, u32) {
    let scale = target_w as f64 / src_w as f64;
    let height = (src_h as f64 * scale).round() as u32;
    (target_w, height.max(1))
}

/// フレームを下端に揃えるための縦方向オフセット
///
/// フレームがキャンバスより高い場合は None。
pub fn bottom_anchor_offset(canvas_h: u32, frame_h: u32) -> Option<u32> {
    canvas_h.checked_sub(frame_h)
}
