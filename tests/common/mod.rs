#![allow(dead_code)]

pub mod mock_backend;

use corner_detect::SelectedFile;

/// JFIFヘッダだけのJPEG
pub fn jpeg_file(name: &str) -> SelectedFile {
    SelectedFile::new(
        name,
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0xFF, 0xD9],
    )
}

/// 接続を受け付けないオリジン
pub async fn closed_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
