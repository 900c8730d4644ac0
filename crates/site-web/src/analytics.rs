//! Mixpanel binding for [`LinkTracker`]

use leptos::logging::warn;
use site_core::LinkTracker;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Forwards to `mixpanel.track_links` on the page's global client.
///
/// Missing or failing clients are logged and otherwise ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct MixpanelTracker;

impl MixpanelTracker {
    /// `window.mixpanel`, if the page loaded it
    fn client() -> Option<JsValue> {
        let window = web_sys::window()?;
        let client = js_sys::Reflect::get(&window, &JsValue::from_str("mixpanel")).ok()?;
        (!client.is_undefined() && !client.is_null()).then_some(client)
    }

    fn call_track_links(client: &JsValue, element: &HtmlAnchorElement, event: &str) -> Result<(), JsValue> {
        let track_links = js_sys::Reflect::get(client, &JsValue::from_str("track_links"))?
            .dyn_into::<js_sys::Function>()?;
        track_links.call2(client, element, &JsValue::from_str(event))?;
        Ok(())
    }
}

impl LinkTracker<HtmlAnchorElement> for MixpanelTracker {
    fn track_links(&self, element: &HtmlAnchorElement, event: &str) {
        let Some(client) = Self::client() else {
            warn!("mixpanel not loaded, not tracking {}", element.href());
            return;
        };
        if let Err(e) = Self::call_track_links(&client, element, event) {
            warn!("mixpanel.track_links failed: {e:?}");
        }
    }
}
