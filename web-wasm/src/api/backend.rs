//! fetchによるバックエンド呼び出し
//!
//! リトライ・タイムアウト・キャンセルはしない。

use corner_detect_common::types::{UPLOAD_FIELD, UPLOAD_PATH};
use corner_detect_common::{
    base_url_or_default, endpoint_url, output_url, Algorithm, DetectionResponse, SelectedFile,
    DEFAULT_BASE_URL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// バックエンドのオリジン
///
/// ビルド時に `CORNER_DETECT_BASE_URL` で差し替えられる。
/// 不正な値は警告を出して既定値に戻す
pub fn backend_origin() -> String {
    match base_url_or_default(option_env!("CORNER_DETECT_BASE_URL")) {
        Ok(origin) => origin,
        Err(e) => {
            web_sys::console::warn_1(&format!("{}; {} を使います", e, DEFAULT_BASE_URL).into());
            DEFAULT_BASE_URL.to_string()
        }
    }
}

/// `image` フィールド1つだけのFormData
pub fn build_upload_form(file: &SelectedFile) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let bag = BlobPropertyBag::new();
    bag.set_type("image/jpeg");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)?;
    Ok(form)
}

async fn fetch(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    resp_value.dyn_into()
}

/// 画像をアップロードし、生のレスポンスを返す（ステータス判定は呼び出し側）
pub async fn upload_image(origin: &str, file: &SelectedFile) -> Result<Response, JsValue> {
    let body: JsValue = build_upload_form(file)?.into();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(&endpoint_url(origin, UPLOAD_PATH), &opts)?;
    fetch(&request).await
}

/// アルゴリズムを実行し、出力画像URLを返す。200以外は `None`
pub async fn detect(origin: &str, algorithm: Algorithm) -> Result<Option<String>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&endpoint_url(origin, algorithm.endpoint()), &opts)?;
    let resp = fetch(&request).await?;

    if resp.status() != 200 {
        return Ok(None);
    }

    let json = JsFuture::from(resp.json()?).await?;
    let res: DetectionResponse = serde_wasm_bindgen::from_value(json)?;
    web_sys::console::log_1(&algorithm.success_message().into());

    Ok(Some(output_url(origin, &res.path)))
}
