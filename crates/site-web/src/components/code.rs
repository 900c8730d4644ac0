//! Copyable command snippet

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

const COPIED_FOR: Duration = Duration::from_secs(2);

#[component]
pub fn Code(#[prop(into)] id: String, #[prop(into)] code: String) -> impl IntoView {
    let copied = RwSignal::new(false);
    let text = code.clone();

    let copy = move |_| {
        let text = text.clone();
        leptos::task::spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    copied.set(true);
                    set_timeout(move || copied.set(false), COPIED_FOR);
                }
                Err(e) => warn!("copy failed: {e}"),
            }
        });
    };

    view! {
        <pre id=id class="flex items-center gap-4 rounded bg-dark-800 text-gray-200 px-6 py-3 font-mono">
            <code>
                <span class="select-none text-gray-500">"$ "</span>
                {code}
            </code>
            <button
                class="text-sm text-gray-400 hover:text-white transition"
                title="Copy to clipboard"
                on:click=copy
            >
                {move || if copied.get() { "Copied" } else { "Copy" }}
            </button>
        </pre>
    }
}

/// Resolves once the browser has accepted the write
async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
