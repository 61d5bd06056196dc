//! アップロード画面の状態と遷移
//!
//! 画面側のスクリプトはこの遷移と同じ規則で動く。

use crate::constants::MAX_UPLOAD_MB;
use crate::language::BannerLanguage;
use crate::validation::{check_upload, UploadCheck};

/// 言語未選択で処理を要求したときのメッセージ
pub const LANGUAGE_REQUIRED_MESSAGE: &str = "Please select a language for the banner.";

/// 画面の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploaderState {
    /// プレビュー用の data URL
    pub image: Option<String>,
    /// サーバーから返された合成済み画像の data URL
    pub processed_image: Option<String>,
    /// 小数点以下 2 桁の MB 表記
    pub file_size_mb: Option<String>,
    pub error: Option<String>,
    pub language: Option<BannerLanguage>,
    pub loading: bool,
    /// ファイル入力欄をクリアするたびに増える
    pub input_generation: u64,
}

/// 画面で発生するイベント
#[derive(Debug, Clone, PartialEq)]
pub enum UploaderAction {
    FileSelected { mime: String, size_bytes: u64 },
    FileLoaded { data_url: String },
    LanguageSelected(BannerLanguage),
    ProcessRequested,
    ProcessSucceeded { image: String },
    ProcessFailed { message: String },
    Cleared,
}

/// 遷移の結果、外部に発行すべきリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub image: String,
    pub language: BannerLanguage,
}

impl UploaderState {
    /// アクションを適用する。合成リクエストを送るべきときだけ Some を返す
    pub fn reduce(&mut self, action: UploaderAction) -> Option<UploadRequest> {
        match action {
            UploaderAction::FileSelected { mime, size_bytes } => {
                match check_upload(&mime, size_bytes) {
                    UploadCheck::NotAnImage => {}
                    UploadCheck::TooLarge { size_mb } => {
                        self.file_size_mb = Some(format!("{size_mb:.2}"));
                        self.error = Some(format!(
                            "File size exceeds {MAX_UPLOAD_MB} MB. Please upload a smaller image."
                        ));
                        self.image = None;
                        self.processed_image = None;
                    }
                    UploadCheck::Accepted { size_mb } => {
                        self.file_size_mb = Some(format!("{size_mb:.2}"));
                        self.error = None;
                    }
                }
                None
            }
            UploaderAction::FileLoaded { data_url } => {
                self.image = Some(data_url);
                self.processed_image = None;
                None
            }
            UploaderAction::LanguageSelected(language) => {
                self.language = Some(language);
                self.error = None;
                None
            }
            UploaderAction::ProcessRequested => {
                let Some(language) = self.language else {
                    self.error = Some(LANGUAGE_REQUIRED_MESSAGE.to_string());
                    return None;
                };
                let image = self.image.clone()?;
                if self.loading {
                    return None;
                }
                self.loading = true;
                Some(UploadRequest { image, language })
            }
            UploaderAction::ProcessSucceeded { image } => {
                self.processed_image = Some(image);
                self.loading = false;
                None
            }
            UploaderAction::ProcessFailed { message } => {
                self.loading = false;
                self.error = Some(message);
                None
            }
            UploaderAction::Cleared => {
                *self = Self {
                    input_generation: self.input_generation + 1,
                    ..Self::default()
                };
                None
            }
        }
    }

    /// ダウンロードボタンを出せるか
    pub fn can_download(&self) -> bool {
        self.processed_image.is_some() && !self.loading
    }

    pub fn button_label(&self) -> &'static str {
        if self.processed_image.is_none() || self.language.is_some() {
            "Add Banner"
        } else {
            "Completed"
        }
    }
}
