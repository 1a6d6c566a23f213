//! 出力画像の保存

use crate::api::BackendClient;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// URL末尾のファイル名（なければ `output.jpg`）
pub fn file_name_from_url(url: &str) -> String {
    let url = url.split(['?', '#']).next().unwrap_or_default();

    // スキームとホストは名前に使わない
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or_default(),
        None => url,
    };

    path.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("output.jpg")
        .to_string()
}

/// 出力画像をダウンロードして `dir` に保存する
pub async fn save_output(client: &BackendClient, url: &str, dir: &Path) -> Result<PathBuf> {
    let bytes = client.fetch_image(url).await?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name_from_url(url));
    std::fs::write(&path, &bytes)?;

    log::debug!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
