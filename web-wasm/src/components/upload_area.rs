//! ファイル選択・アップロードコンポーネント

use corner_detect_common::{SelectedFile, ViewState};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea<FU>(state: RwSignal<ViewState>, on_upload: FU) -> impl IntoView
where
    FU: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);

        // 読み込み完了を待たずに前回のアップロードを無効にする
        let mut selection = 0;
        state.update(|s| selection = s.begin_selection());

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let on_loaded = move |file: SelectedFile| {
            state.update(|s| {
                s.finish_selection(selection, file);
            });
        };
        let on_error = move |message: String| {
            state.update(|s| {
                s.fail_selection(selection, message);
            });
        };

        if let Err(e) = read_file(file, on_loaded, on_error.clone()) {
            on_error(format!("ファイルを読み込めません: {:?}", e));
        }
    };

    view! {
        <div class="upload-row">
            <div class="form-group">
                <label for="file">"Upload Image"</label>
                <input id="file" type="file" accept=".jpg" on:change=on_change />
            </div>
            <button
                class="btn btn-icon"
                aria-label="Upload"
                disabled=move || !state.with(|s| s.can_upload())
                on:click={
                    let on_upload = on_upload.clone();
                    move |_| on_upload(())
                }
            >
                "⬆"
            </button>
        </div>
        <Show when=move || state.with(|s| s.uploaded)>
            <p class="upload-status">
                {move || state.with(|s| s.status_message().unwrap_or_default())}
            </p>
        </Show>
    }
}

/// 選択されたファイルをバイト列として読み込む
fn read_file<L, E>(file: File, on_loaded: L, on_error: E) -> Result<(), JsValue>
where
    L: Fn(SelectedFile) + 'static,
    E: Fn(String) + 'static + Clone,
{
    let file_name = file.name();
    let reader = FileReader::new()?;

    let reader_clone = reader.clone();
    let on_load_error = on_error.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result() {
            Ok(result) => {
                let bytes = js_sys::Uint8Array::new(&result).to_vec();
                on_loaded(SelectedFile::new(file_name.clone(), bytes));
            }
            Err(e) => on_load_error(format!("ファイルを読み込めません: {:?}", e)),
        }
    }) as Box<dyn FnMut(_)>);

    let failed_name = file.name();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        on_error(format!("ファイルを読み込めません: {}", failed_name));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    reader.read_as_array_buffer(&file)
}
