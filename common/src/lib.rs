//! Corner Detect Common Library
//!
//! CLIとWeb(WASM)で共有される型・URL組み立て・画面状態

pub mod algorithm;
pub mod error;
pub mod types;
pub mod url;
pub mod view;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use types::{DetectionResponse, PingResponse, UploadResponse};
pub use url::{base_url_or_default, endpoint_url, normalize_base_url, output_url, DEFAULT_BASE_URL};
pub use view::{SelectedFile, ViewState};
