//! Dismissible banner above the hero

use leptos::prelude::*;
use site_core::SiteConstants;

use crate::context::use_announcement_bar_is_closed;

#[component]
pub fn AnnouncementBar() -> impl IntoView {
    let (is_closed, set_is_closed) = use_announcement_bar_is_closed();
    let constants = SiteConstants::default();

    view! {
        <Show when=move || !is_closed.get()>
            <div class="w-full flex items-center justify-center gap-4 bg-brand-orange1 text-dark-700 font-bold px-6 py-2">
                <span>{constants.announcement}</span>
                <a class="underline" href=constants.discord_url target="_blank">
                    "Join us"
                </a>
                <button
                    class="ml-auto"
                    aria-label="Close announcement"
                    on:click=move |_| set_is_closed.set(true)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
