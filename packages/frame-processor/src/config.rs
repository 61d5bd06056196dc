use std::net::SocketAddr;
use std::path::PathBuf;

use frame_core::MAX_BODY_BYTES;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ASSETS_DIR: &str = "public";

/// サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// フレーム画像を置くディレクトリ（作業ディレクトリからの相対パス可）
    pub assets_dir: PathBuf,
    /// リクエストボディの上限（バイト）
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            body_limit: MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// 環境変数から ServerConfig を作成する
    ///
    /// 任意の環境変数:
    /// - FRAME_BIND_ADDR（既定 0.0.0.0:3000）
    /// - FRAME_ASSETS_DIR（既定 public）
    /// - FRAME_BODY_LIMIT_BYTES（既定 10MB）
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let bind_addr = lookup("FRAME_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| format!("FRAME_BIND_ADDR is invalid: {e}"))?;

        let assets_dir = lookup("FRAME_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let body_limit = match lookup("FRAME_BODY_LIMIT_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| format!("FRAME_BODY_LIMIT_BYTES is invalid: {value}"))?,
            None => MAX_BODY_BYTES,
        };

        Ok(Self {
            bind_addr,
            assets_dir,
            body_limit,
        })
    }
}
