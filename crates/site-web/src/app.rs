//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};
use site_core::SiteConfig;

use crate::analytics::MixpanelTracker;
use crate::components::AnnouncementBar;
use crate::context::{RoutingContext, provide_announcement_bar, provide_link_tracker};
use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let base_path = SiteConfig::compiled_base_path();

    provide_context(RoutingContext {
        base_path: base_path.clone(),
    });
    provide_announcement_bar();
    provide_link_tracker(MixpanelTracker);

    view! {
        <Router base=base_path>
            <AnnouncementBar />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
