use crate::config::Config;
use crate::error::{CornerDetectError, Result};
use corner_detect_common::types::{PING_PATH, UPLOAD_FIELD, UPLOAD_PATH};
use corner_detect_common::{
    endpoint_url, normalize_base_url, output_url, Algorithm, DetectionResponse, PingResponse,
    SelectedFile,
};
use reqwest::header::CACHE_CONTROL;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

/// バックエンドクライアント
///
/// リトライ・タイムアウト・キャンセルは行わない。
/// 通信失敗はそのまま `Err` として呼び出し側へ返す。
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    origin: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            origin: normalize_base_url(base_url)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// 画像をアップロードする
    ///
    /// 生のレスポンスを返す。200以外でもエラーにはしない。
    pub async fn upload_image(&self, file: &SelectedFile) -> Result<reqwest::Response> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str("image/jpeg")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let url = endpoint_url(&self.origin, UPLOAD_PATH);
        log::debug!("POST {} ({}, {} bytes)", url, file.name, file.bytes.len());

        let response = self.http.post(&url).multipart(form).send().await?;
        log::debug!("upload -> HTTP {}", response.status().as_u16());
        Ok(response)
    }

    /// アルゴリズムを実行し、出力画像のURLを返す
    ///
    /// 200以外は `None`。「コーナーなし」とバックエンド障害は区別できない。
    pub async fn detect(&self, algorithm: Algorithm) -> Result<Option<String>> {
        let url = endpoint_url(&self.origin, algorithm.endpoint());
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("{} returned HTTP {}", algorithm.endpoint(), status.as_u16());
            return Ok(None);
        }

        let body = response.text().await?;
        let res: DetectionResponse = serde_json::from_str(&body)?;
        log::info!("{}", algorithm.success_message());

        Ok(Some(output_url(&self.origin, &res.path)))
    }

    pub async fn fast_jpeg(&self) -> Result<Option<String>> {
        self.detect(Algorithm::Fast).await
    }

    pub async fn harris(&self) -> Result<Option<String>> {
        self.detect(Algorithm::Harris).await
    }

    pub async fn shi_tomashi(&self) -> Result<Option<String>> {
        self.detect(Algorithm::ShiTomashi).await
    }

    /// 死活確認（`/ping` が `pong` を返すか）
    pub async fn ping(&self) -> Result<bool> {
        let url = endpoint_url(&self.origin, PING_PATH);
        let response = self.http.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Ok(false);
        }

        let res: PingResponse = serde_json::from_str(&response.text().await?)?;
        Ok(res.message == "pong")
    }

    /// 出力画像を取得する
    ///
    /// 出力ファイル名はアルゴリズムごとに固定なので、キャッシュを使わせない
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CornerDetectError::ImageFetch {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_origin() {
        let client = BackendClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.origin(), "http://localhost:8080");
    }

    #[test]
    fn test_new_rejects_invalid_origin() {
        assert!(matches!(
            BackendClient::new("localhost:8080"),
            Err(CornerDetectError::Common(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            base_url: "https://corners.example.com".into(),
        };
        let client = BackendClient::from_config(&config).unwrap();
        assert_eq!(client.origin(), "https://corners.example.com");
    }
}
