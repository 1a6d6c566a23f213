//! アルゴリズム実行ボタン

use corner_detect_common::{Algorithm, ViewState};
use leptos::prelude::*;

#[component]
pub fn AlgorithmButtons<F>(state: RwSignal<ViewState>, on_detect: F) -> impl IntoView
where
    F: Fn(Algorithm) + 'static + Clone,
{
    view! {
        <div class="algorithm-buttons">
            {Algorithm::ALL
                .into_iter()
                .map(|algorithm| {
                    let on_detect = on_detect.clone();
                    view! {
                        <button
                            class="btn btn-primary"
                            disabled=move || !state.with(|s| s.can_run(algorithm))
                            on:click=move |_| on_detect(algorithm)
                        >
                            {move || state.with(|s| s.button_label(algorithm))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
