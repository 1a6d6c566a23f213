//! メインアプリケーションコンポーネント

use crate::api;
use crate::components::{
    algorithm_buttons::AlgorithmButtons, header::Header, output_view::OutputView,
    upload_area::UploadArea,
};
use corner_detect_common::{Algorithm, ViewState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// メインアプリケーションコンポーネント
///
/// 状態はページ内だけで保持し、再読み込みで初期化される。
/// 複数のアルゴリズムを続けて押した場合は、後に返った結果が表示される。
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    let origin = api::backend_origin();

    let on_upload = {
        let origin = origin.clone();
        move |_: ()| {
            let Some(file) = state.with_untracked(|s| s.selected_file.clone()) else {
                return;
            };
            let origin = origin.clone();
            spawn_local(async move {
                match api::upload_image(&origin, &file).await {
                    Ok(resp) => {
                        let status = resp.status();
                        if status == 200 {
                            log("Image uploaded successfully");
                        }
                        state.update(|s| s.finish_upload(status));
                    }
                    Err(e) => state.update(|s| s.fail(None, format!("{:?}", e))),
                }
            });
        }
    };

    let on_detect = move |algorithm: Algorithm| {
        if !state.with_untracked(|s| s.can_run(algorithm)) {
            return;
        }
        state.update(|s| s.begin_detection(algorithm));

        let origin = origin.clone();
        spawn_local(async move {
            match api::detect(&origin, algorithm).await {
                Ok(url) => state.update(|s| s.finish_detection(algorithm, url)),
                Err(e) => state.update(|s| s.fail(Some(algorithm), format!("{:?}", e))),
            }
        });
    };

    view! {
        <div class="container">
            <Header />
            <UploadArea state=state on_upload=on_upload />
            <AlgorithmButtons state=state on_detect=on_detect />
            <OutputView state=state />
        </div>
    }
}
