use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::DataUrlError;

const DEFAULT_MIME: &str = "application/octet-stream";

/// base64 でエンコードされた data URL
///
/// `data:<mime>[;param...];base64,<payload>` の形式のみ扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUrl {
    /// PNG の data URL を作成
    pub fn png(data: Vec<u8>) -> Self {
        Self {
            mime: "image/png".to_string(),
            data,
        }
    }

    /// data URL 文字列をパースする
    pub fn parse(input: &str) -> Result<Self, DataUrlError> {
        let rest = input
            .trim()
            .strip_prefix("data:")
            .ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;

        let mut parts = header.split(';');
        let mime = parts.next().unwrap_or_default().trim();
        if !parts.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(DataUrlError::NotBase64);
        }

        // ブラウザによっては改行を含むことがある
        let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let data = STANDARD
            .decode(payload)
            .map_err(|e| DataUrlError::InvalidBase64(e.to_string()))?;

        Ok(Self {
            mime: if mime.is_empty() {
                DEFAULT_MIME.to_string()
            } else {
                mime.to_ascii_lowercase()
            },
            data,
        })
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_data_url() {
        let url = DataUrl::parse("data:image/jpeg;base64,AQID").unwrap();
        assert_eq!(url.mime, "image/jpeg");
        assert_eq!(url.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_with_params_and_whitespace() {
        let url = DataUrl::parse("data:Image/PNG;name=a.png;base64,AQ\nID").unwrap();
        assert_eq!(url.mime, "image/png");
        assert_eq!(url.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_without_mime() {
        let url = DataUrl::parse("data:;base64,AQID").unwrap();
        assert_eq!(url.mime, DEFAULT_MIME);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(DataUrl::parse("AQID"), Err(DataUrlError::MissingScheme));
        assert_eq!(
            DataUrl::parse("data:image/png;base64"),
            Err(DataUrlError::MissingPayload)
        );
        assert_eq!(
            DataUrl::parse("data:text/plain,hello"),
            Err(DataUrlError::NotBase64)
        );
        assert!(matches!(
            DataUrl::parse("data:image/png;base64,!!!not base64!!!"),
            Err(DataUrlError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_display_png() {
        let url = DataUrl::png(vec![0x89, b'P', b'N', b'G']);
        assert_eq!(url.to_string(), "data:image/png;base64,iVBORw==");
    }
}
