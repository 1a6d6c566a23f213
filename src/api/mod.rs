//! バックエンドAPI連携
//!
//! - upload: multipartで画像を送る（ステータス判定は呼び出し側）
//! - fast-jpeg / harris / shi-tomashi: GETで実行し、出力画像URLを返す

mod client;

pub use client::BackendClient;
pub use corner_detect_common::{DetectionResponse, PingResponse, UploadResponse};
