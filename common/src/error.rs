//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Unknown algorithm: {0}. Use fast, harris, or shi-tomashi")]
    UnknownAlgorithm(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
