//! バックエンドURLの組み立て

use crate::error::{Error, Result};

/// 設定がない場合のバックエンド
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// ベースURLを正規化する
///
/// 前後の空白と末尾の `/` を取り除く。スキームは http / https のみ。
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| Error::InvalidBaseUrl(raw.to_string()))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() || host.starts_with(':') {
        return Err(Error::InvalidBaseUrl(raw.to_string()));
    }

    Ok(trimmed.to_string())
}

/// 指定がなければ既定のバックエンド、あれば正規化した値
pub fn base_url_or_default(raw: Option<&str>) -> Result<String> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => normalize_base_url(raw),
        _ => Ok(DEFAULT_BASE_URL.to_string()),
    }
}

/// `/upload` などの固定エンドポイントのURL
pub fn endpoint_url(origin: &str, endpoint: &str) -> String {
    format!("{}{}", origin, endpoint)
}

/// バックエンドが返した相対パスから出力画像URLを作る
pub fn output_url(origin: &str, path: &str) -> String {
    format!("{}/{}", origin, path.trim_start_matches('/'))
}
