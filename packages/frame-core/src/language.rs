use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// バナーの言語を指定するリクエストヘッダ
pub const BANNER_LANGUAGE_HEADER: &str = "banner-language";

/// バナー文言の言語
///
/// 言語ごとに `<assets_dir>/<Label>.png` のフレーム画像を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerLanguage {
    #[default]
    English,
    Hindi,
    Marathi,
    Gujarati,
}

impl BannerLanguage {
    pub const ALL: [BannerLanguage; 4] = [
        BannerLanguage::English,
        BannerLanguage::Hindi,
        BannerLanguage::Marathi,
        BannerLanguage::Gujarati,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
            Self::Gujarati => "Gujarati",
        }
    }

    /// ヘッダ値から言語を決める。未指定・未知の値は English
    pub fn from_header(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// フレーム画像のパス
    pub fn frame_path(self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(format!("{}.png", self.label()))
    }
}

impl fmt::Display for BannerLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BannerLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown banner language: {s}"))
    }
}
