//! 画面コントローラテスト
//!
//! ファイル選択 → アップロード → アルゴリズム実行の状態遷移を検証

mod common;

use common::mock_backend::MockBackend;
use common::{closed_origin, jpeg_file};
use corner_detect::api::BackendClient;
use corner_detect::error::CornerDetectError;
use corner_detect::page::Page;
use corner_detect::Algorithm;
use serde_json::json;
use std::time::Duration;

async fn page_with(mock: &MockBackend) -> (Page, String) {
    let origin = mock.start().await;
    let page = Page::new(BackendClient::new(&origin).unwrap());
    (page, origin)
}

fn mock_with_upload(status: u16) -> MockBackend {
    let mock = MockBackend::new();
    mock.reply("/upload", status, json!({ "message": "File uploaded successfully" }));
    mock
}

#[tokio::test]
async fn test_upload_ok_sets_uploaded() {
    let mock = mock_with_upload(200);
    let (page, _) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    assert!(page.upload().await.unwrap());

    let state = page.state();
    assert!(state.uploaded);
    assert!(state.status_message().is_some());
    for alg in Algorithm::ALL {
        assert!(state.can_run(alg));
    }
}

#[tokio::test]
async fn test_upload_500_leaves_not_uploaded() {
    let mock = mock_with_upload(500);
    let (page, _) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    assert!(!page.upload().await.unwrap());

    let state = page.state();
    assert!(!state.uploaded);
    assert!(state.last_error.is_none());
    assert!(!state.can_run(Algorithm::Fast));
}

#[tokio::test]
async fn test_select_file_resets_after_result() {
    let mock = mock_with_upload(200);
    mock.reply("/fast-jpeg", 200, json!({ "path": "fast.jpg" }));
    let (page, _) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("first.jpg")));
    page.upload().await.unwrap();
    page.run_detection(Algorithm::Fast).await.unwrap();
    assert!(page.state().output_url.is_some());

    page.select_file(Some(jpeg_file("second.jpg")));
    let state = page.state();
    assert!(!state.uploaded);
    assert!(state.output_url.is_none());

    // 再アップロードまではボタンが押せない
    let err = page.run_detection(Algorithm::Fast).await.unwrap_err();
    assert!(matches!(err, CornerDetectError::ActionDisabled(_)));
    assert_eq!(mock.hits_for("/fast-jpeg").len(), 1);
}

#[tokio::test]
async fn test_harris_result_is_displayed() {
    let mock = mock_with_upload(200);
    mock.reply("/harris", 200, json!({ "path": "output/result.jpg" }));
    let (page, origin) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    page.upload().await.unwrap();
    page.run_detection(Algorithm::Harris).await.unwrap();

    let state = page.state();
    assert_eq!(state.output_url, Some(format!("{}/output/result.jpg", origin)));
    assert!(!state.harris_loading);
}

#[tokio::test]
async fn test_404_leaves_output_unset_and_clears_flag() {
    let mock = mock_with_upload(200);
    for alg in Algorithm::ALL {
        mock.reply(alg.endpoint(), 404, json!({}));
    }
    let (page, _) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    page.upload().await.unwrap();

    for alg in Algorithm::ALL {
        assert_eq!(page.run_detection(alg).await.unwrap(), None);
        let state = page.state();
        assert!(state.output_url.is_none());
        assert!(!state.is_loading(alg));
    }
}

/// 選択 → アップロード → FAST → Harris で出力が上書きされる
#[tokio::test]
async fn test_fast_then_harris_scenario() {
    let mock = mock_with_upload(200);
    mock.reply("/fast-jpeg", 200, json!({ "path": "fast.jpg" }));
    mock.reply("/harris", 200, json!({ "path": "harris.jpg" }));
    let (page, origin) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    assert!(page.upload().await.unwrap());

    page.run_detection(Algorithm::Fast).await.unwrap();
    assert_eq!(page.state().output_url, Some(format!("{}/fast.jpg", origin)));

    page.run_detection(Algorithm::Harris).await.unwrap();
    assert_eq!(page.state().output_url, Some(format!("{}/harris.jpg", origin)));

    let paths: Vec<String> = mock.hits().into_iter().map(|h| h.path).collect();
    assert_eq!(paths, vec!["/upload", "/fast-jpeg", "/harris"]);
}

/// 実行中はフラグが立ち、前の出力は消えている
#[tokio::test]
async fn test_loading_flag_while_outstanding() {
    let mock = mock_with_upload(200);
    mock.reply("/fast-jpeg", 200, json!({ "path": "fast.jpg" }));
    mock.reply_after(
        "/shi-tomashi",
        200,
        json!({ "path": "shi.jpg" }),
        Duration::from_millis(300),
    );
    let (page, origin) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    page.upload().await.unwrap();
    page.run_detection(Algorithm::Fast).await.unwrap();

    let detection = page.run_detection(Algorithm::ShiTomashi);
    tokio::pin!(detection);

    tokio::select! {
        _ = &mut detection => panic!("response arrived before the delay"),
        _ = tokio::time::sleep(Duration::from_millis(50)) => {
            let state = page.state();
            assert!(state.shi_tomashi_loading);
            assert!(!state.can_run(Algorithm::ShiTomashi));
            assert!(state.output_url.is_none());
        }
    }

    // 実行中の二重押しは無効
    assert!(matches!(
        page.run_detection(Algorithm::ShiTomashi).await,
        Err(CornerDetectError::ActionDisabled(_))
    ));

    detection.await.unwrap();
    let state = page.state();
    assert!(!state.shi_tomashi_loading);
    assert_eq!(state.output_url, Some(format!("{}/shi.jpg", origin)));
    assert_eq!(mock.hits_for("/shi-tomashi").len(), 1);
}

/// 並行実行では後に返った結果が残る
#[tokio::test]
async fn test_concurrent_detections_last_response_wins() {
    let mock = mock_with_upload(200);
    mock.reply_after("/fast-jpeg", 200, json!({ "path": "fast.jpg" }), Duration::from_millis(300));
    mock.reply_after("/harris", 200, json!({ "path": "harris.jpg" }), Duration::from_millis(20));
    let (page, origin) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    page.upload().await.unwrap();

    let (fast, harris) = tokio::join!(
        page.run_detection(Algorithm::Fast),
        page.run_detection(Algorithm::Harris)
    );
    assert!(fast.unwrap().is_some());
    assert!(harris.unwrap().is_some());

    let state = page.state();
    assert_eq!(state.output_url, Some(format!("{}/fast.jpg", origin)));
    assert!(!state.fast_loading && !state.harris_loading);
}

/// 応答が読めない場合もフラグは下り、エラーが記録される
#[tokio::test]
async fn test_failed_detection_clears_flag() {
    let mock = mock_with_upload(200);
    mock.reply("/harris", 200, json!({ "message": "no path here" }));
    let (page, _) = page_with(&mock).await;

    page.select_file(Some(jpeg_file("corner.jpg")));
    page.upload().await.unwrap();

    let err = page.run_detection(Algorithm::Harris).await.unwrap_err();
    assert!(matches!(err, CornerDetectError::JsonParse(_)));

    let state = page.state();
    assert!(!state.harris_loading);
    assert!(state.can_run(Algorithm::Harris));
    assert!(state.output_url.is_none());
    assert!(state.last_error.is_some());
}

/// 接続できない場合はアップロード済みにならず、エラーが記録される
#[tokio::test]
async fn test_upload_transport_failure() {
    let page = Page::new(BackendClient::new(&closed_origin().await).unwrap());
    page.select_file(Some(jpeg_file("corner.jpg")));

    assert!(matches!(page.upload().await, Err(CornerDetectError::Http(_))));
    let state = page.state();
    assert!(!state.uploaded);
    assert!(state.last_error.is_some());
}
