//! Shuttle Web Frontend
//!
//! Leptos-based WASM frontend for the landing page.

mod analytics;
mod app;
mod components;
mod context;
mod pages;

pub use analytics::MixpanelTracker;
pub use app::App;
pub use components::{AnnouncementBar, Code, Hero};
pub use context::{
    provide_announcement_bar, provide_link_tracker, use_announcement_bar_is_closed, use_base_path,
    use_link_tracker, LinkTrackerContext, RoutingContext, SharedLinkTracker,
};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
