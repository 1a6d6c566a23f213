//! 画像ファイルの選択
//!
//! ブラウザ版の `accept=".jpg"` に相当するチェックを行う。

use crate::error::{CornerDetectError, Result};
use corner_detect_common::types::is_accepted_file_name;
use corner_detect_common::SelectedFile;
use image::ImageFormat;
use std::path::Path;

pub fn load_image(path: &Path) -> Result<SelectedFile> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !is_accepted_file_name(&file_name) {
        return Err(CornerDetectError::UnsupportedFile(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;

    // 拡張子だけ .jpg の別形式も弾く
    match image::guess_format(&bytes) {
        Ok(ImageFormat::Jpeg) => Ok(SelectedFile::new(file_name, bytes)),
        _ => Err(CornerDetectError::UnsupportedFile(path.display().to_string())),
    }
}
