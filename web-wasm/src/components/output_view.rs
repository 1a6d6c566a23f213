//! 出力画像

use corner_detect_common::view::{OUTPUT_HEIGHT, OUTPUT_WIDTH};
use corner_detect_common::ViewState;
use leptos::prelude::*;

#[component]
pub fn OutputView(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div class="output">
            <Show when=move || state.with(|s| s.output_url.is_some())>
                <img
                    src=move || state.with(|s| s.output_url.clone().unwrap_or_default())
                    width=OUTPUT_WIDTH.to_string()
                    height=OUTPUT_HEIGHT.to_string()
                    alt="output"
                />
            </Show>
            <Show when=move || state.with(|s| s.last_error.is_some())>
                <p class="error">
                    {move || state.with(|s| s.last_error.clone().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
