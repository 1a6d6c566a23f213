//! テスト用のバックエンド
//!
//! パスごとに応答（ステータス・本文・遅延）を設定し、受けたリクエストを記録する。

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum ReplyBody {
    Json(Value),
    Image(Vec<u8>),
}

#[derive(Clone, Debug)]
struct Reply {
    status: u16,
    body: ReplyBody,
    delay: Duration,
}

#[derive(Clone, Debug)]
pub struct UploadField {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct Hit {
    pub method: Method,
    pub path: String,
    pub body_len: usize,
    pub fields: Vec<UploadField>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, path: &str, status: u16, body: Value) -> &Self {
        self.reply_after(path, status, body, Duration::ZERO)
    }

    pub fn reply_after(&self, path: &str, status: u16, body: Value, delay: Duration) -> &Self {
        self.insert(path, Reply { status, body: ReplyBody::Json(body), delay })
    }

    pub fn reply_image(&self, path: &str, bytes: Vec<u8>) -> &Self {
        self.insert(
            path,
            Reply { status: 200, body: ReplyBody::Image(bytes), delay: Duration::ZERO },
        )
    }

    fn insert(&self, path: &str, reply: Reply) -> &Self {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
        self
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn hits_for(&self, path: &str) -> Vec<Hit> {
        self.hits().into_iter().filter(|h| h.path == path).collect()
    }

    /// 127.0.0.1の空きポートで起動し、オリジンを返す
    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/upload", post(upload))
            .fallback(other)
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn record(&self, hit: Hit) {
        self.hits.lock().unwrap().push(hit);
    }

    async fn respond(&self, path: &str) -> Response {
        let reply = self.replies.lock().unwrap().get(path).cloned();
        let Some(reply) = reply else {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response();
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }

        let status = StatusCode::from_u16(reply.status).unwrap();
        match reply.body {
            ReplyBody::Json(value) => (status, Json(value)).into_response(),
            ReplyBody::Image(bytes) => {
                (status, [(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response()
            }
        }
    }
}

async fn upload(State(mock): State<MockBackend>, mut multipart: Multipart) -> Response {
    let mut fields = Vec::new();
    let mut body_len = 0;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        body_len += bytes.len();
        fields.push(UploadField { name, file_name, content_type, bytes });
    }

    mock.record(Hit {
        method: Method::POST,
        path: "/upload".to_string(),
        body_len,
        fields,
    });
    mock.respond("/upload").await
}

async fn other(State(mock): State<MockBackend>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().to_string();
    mock.record(Hit {
        method,
        path: path.clone(),
        body_len: body.len(),
        fields: Vec::new(),
    });
    mock.respond(&path).await
}
