use thiserror::Error;

#[derive(Error, Debug)]
pub enum CornerDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] corner_detect_common::Error),

    #[error("操作できません: {0}")]
    ActionDisabled(String),

    #[error("JPEG画像ではありません: {0}")]
    UnsupportedFile(String),

    #[error("出力画像の取得に失敗 (HTTP {status}): {url}")]
    ImageFetch { status: u16, url: String },
}

pub type Result<T> = std::result::Result<T, CornerDetectError>;
