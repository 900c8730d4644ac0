//! Shared Context
//!
//! Values injected by the app shell and read by components: routing base
//! path, announcement-bar flag and the link tracker.

use std::sync::Arc;

use leptos::logging::warn;
use leptos::prelude::*;
use site_core::announcement::STORAGE_KEY;
use site_core::{AnnouncementBarState, LinkTracker, SiteConfig};
use web_sys::HtmlAnchorElement;

use crate::analytics::MixpanelTracker;

/// Routing data supplied per navigation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingContext {
    pub base_path: String,
}

/// Base path static assets are served under
pub fn use_base_path() -> String {
    use_context::<RoutingContext>()
        .map_or_else(SiteConfig::compiled_base_path, |routing| routing.base_path)
}

// --- announcement bar ---

#[derive(Clone, Copy)]
struct AnnouncementBarContext(RwSignal<bool>);

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Restore the persisted flag, share it, and write it back on every change
pub fn provide_announcement_bar() -> RwSignal<bool> {
    let stored = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok()?);
    let is_closed = RwSignal::new(AnnouncementBarState::restore(stored.as_deref()).is_closed);

    Effect::new(move |_| {
        let state = AnnouncementBarState {
            is_closed: is_closed.get(),
        };
        let Some(storage) = local_storage() else {
            warn!("localStorage unavailable, announcement bar state not saved");
            return;
        };
        if let Err(e) = storage.set_item(STORAGE_KEY, &state.encode()) {
            warn!("failed to save announcement bar state: {e:?}");
        }
    });

    provide_context(AnnouncementBarContext(is_closed));
    is_closed
}

/// `(is_closed, set_is_closed)`; without a provider the bar reads as open
pub fn use_announcement_bar_is_closed() -> (ReadSignal<bool>, WriteSignal<bool>) {
    use_context::<AnnouncementBarContext>()
        .map_or_else(|| RwSignal::new(false), |ctx| ctx.0)
        .split()
}

// --- analytics ---

pub type SharedLinkTracker = Arc<dyn LinkTracker<HtmlAnchorElement> + Send + Sync>;

/// Tracker used for call-to-action links
#[derive(Clone)]
pub struct LinkTrackerContext(pub SharedLinkTracker);

pub fn provide_link_tracker(tracker: impl LinkTracker<HtmlAnchorElement> + Send + Sync + 'static) {
    provide_context(LinkTrackerContext(Arc::new(tracker)));
}

/// Falls back to Mixpanel when no tracker was provided
pub fn use_link_tracker() -> SharedLinkTracker {
    match use_context::<LinkTrackerContext>() {
        Some(ctx) => ctx.0,
        None => Arc::new(MixpanelTracker),
    }
}
