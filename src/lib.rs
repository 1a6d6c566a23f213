//! コーナー検出クライアント
//!
//! バックエンドへ画像をアップロードし、FAST / Harris / Shi-Tomashi を
//! 実行して結果画像のURLを得る。

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod page;
pub mod picker;

pub use corner_detect_common::{Algorithm, SelectedFile, ViewState};
