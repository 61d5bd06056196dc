use crate::constants::OUTPUT_DIMENSION;

/// 合成パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeParams {
    /// クロップ後の写真（＝キャンバス）の幅
    pub width: u32,
    /// クロップ後の写真（＝キャンバス）の高さ
    pub height: u32,
}

impl ComposeParams {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 一辺 `size` の正方形
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self::square(OUTPUT_DIMENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_output_square() {
        let params = ComposeParams::default();
        assert_eq!(params.width, 1000);
        assert_eq!(params.height, 1000);
    }
}
