/// 正方形クロップ後の出力サイズ（幅・高さ）
pub const OUTPUT_DIMENSION: u32 = 1000;

/// 出力画像の最大寸法（幅・高さ）
pub const MAX_DIMENSION: u32 = 4096;

/// デコード後に許容する最大ピクセル数（極端な入力によるメモリ枯渇のみ防止）
pub const MAX_PIXELS: u64 = 100_000_000;

/// アップロード可能な最大ファイルサイズ（MB）
pub const MAX_UPLOAD_MB: u64 = 10;

/// リクエストボディの上限（バイト）
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// ダウンロード時のファイル名
pub const DOWNLOAD_FILENAME: &str = "framed-image.png";
