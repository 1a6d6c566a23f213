//! バックエンドAPI連携（fetch）

mod backend;

pub use backend::{backend_origin, build_upload_form, detect, upload_image};
