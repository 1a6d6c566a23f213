//! バックエンドとのやり取りに使う型

use serde::{Deserialize, Serialize};

/// アップロード先
pub const UPLOAD_PATH: &str = "/upload";

/// 死活確認
pub const PING_PATH: &str = "/ping";

/// multipartのフィールド名（バックエンドは `image` しか読まない）
pub const UPLOAD_FIELD: &str = "image";

/// 受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// アルゴリズム実行結果
///
/// `path` は出力画像のオリジン相対パス（例: `output/modified-harris.jpg`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub path: String,

    #[serde(default)]
    pub message: Option<String>,
}

/// アップロード応答
///
/// クライアントはステータスコードしか見ないが、ログ用に中身も読めるようにしておく
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// ファイル名が受付対象の拡張子か
pub fn is_accepted_file_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
