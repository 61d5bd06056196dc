use crate::constants::{MAX_DIMENSION, MAX_UPLOAD_MB};
use crate::errors::TransformError;
use crate::transform::ComposeParams;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// 合成パラメータを検証する
pub fn validate_compose_params(params: &ComposeParams) -> Result<(), TransformError> {
    // 幅の検証
    if params.width == 0 || params.width > MAX_DIMENSION {
        return Err(TransformError::InvalidInput(format!(
            "width must be 1-{MAX_DIMENSION}, got {}",
            params.width
        )));
    }

    // 高さの検証
    if params.height == 0 || params.height > MAX_DIMENSION {
        return Err(TransformError::InvalidInput(format!(
            "height must be 1-{MAX_DIMENSION}, got {}",
            params.height
        )));
    }

    Ok(())
}

/// アップロード前のファイルを検証した結果
#[derive(Debug, Clone, PartialEq)]
pub enum UploadCheck {
    /// 画像ではないので無視する
    NotAnImage,
    /// サイズ超過
    TooLarge { size_mb: f64 },
    Accepted { size_mb: f64 },
}

/// アップロード対象ファイルの MIME とサイズを検証する
pub fn check_upload(mime: &str, size_bytes: u64) -> UploadCheck {
    if !mime.starts_with("image") {
        return UploadCheck::NotAnImage;
    }

    let size_mb = size_bytes as f64 / BYTES_PER_MB as f64;
    if size_mb > MAX_UPLOAD_MB as f64 {
        UploadCheck::TooLarge { size_mb }
    } else {
        UploadCheck::Accepted { size_mb }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        assert!(validate_compose_params(&ComposeParams::default()).is_ok());
        assert!(validate_compose_params(&ComposeParams::new(1, 4096)).is_ok());
    }

    #[test]
    fn test_invalid_params() {
        assert!(validate_compose_params(&ComposeParams::new(0, 100)).is_err());
        assert!(validate_compose_params(&ComposeParams::new(100, 0)).is_err());
        assert!(validate_compose_params(&ComposeParams::square(4097)).is_err());
    }

    #[test]
    fn test_check_upload() {
        assert_eq!(check_upload("text/plain", 10), UploadCheck::NotAnImage);
        assert_eq!(
            check_upload("image/jpeg", 5 * BYTES_PER_MB),
            UploadCheck::Accepted { size_mb: 5.0 }
        );
        // ちょうど 10MB は許可
        assert_eq!(
            check_upload("image/png", 10 * BYTES_PER_MB),
            UploadCheck::Accepted { size_mb: 10.0 }
        );
        assert!(matches!(
            check_upload("image/png", 10 * BYTES_PER_MB + 1),
            UploadCheck::TooLarge { .. }
        ));
    }
}
