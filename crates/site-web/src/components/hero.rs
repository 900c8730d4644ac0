//! Hero Section

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use site_core::hero::{self, CtaLink};
use site_core::{
    AnnouncementBarState, CLICKED_LINK, HeroLayout, LinkBinder, LinkTracker, SiteConstants,
};
use web_sys::HtmlAnchorElement;

use crate::components::Code;
use crate::context::{use_announcement_bar_is_closed, use_base_path, use_link_tracker};

/// Landing hero: logo, tagline, install command and the two CTAs
#[component]
pub fn Hero() -> impl IntoView {
    let (announcement_bar_is_closed, _) = use_announcement_bar_is_closed();
    let base_path = use_base_path();
    let layout = HeroLayout::new(&base_path, &SiteConstants::default());

    let root_class = move || {
        hero::root_class(AnnouncementBarState {
            is_closed: announcement_bar_is_closed.get(),
        })
    };

    let binder = Rc::new(LinkBinder::new(use_link_tracker()));
    let [docs, discord] = layout.links;
    let docs_ref = track_clicks(&binder);
    let discord_ref = track_clicks(&binder);

    view! {
        <div class=root_class>
            <div class="xl:px-12 py-5 mx-auto">
                <div class="p-6 sm:py-8">
                    <div class="max-w-3xl m-auto text-center flex flex-col gap-8 sm:gap-11">
                        <div class="flex m-auto relative">
                            <img class="h-16" src=layout.logo_src alt=layout.logo_alt />
                            <span class="bg-brand-orange1 text-dark-700 font-bold absolute scale-[.8] bottom-[-26px] right-[-5px] text-base px-[10px] py-[2px] rounded">
                                "ALPHA"
                            </span>
                        </div>

                        <div>
                            <div class="mb-5 text-4xl sm:text-5xl md:text-6xl font-bold text-gray-200">
                                {layout.title}
                            </div>
                            <div class="text-xl font-normal text-gray-300 px-10">
                                {layout.description}
                            </div>
                        </div>

                        <div class="hidden md:flex flex-col justify-center items-center">
                            <Code id=layout.snippet_id code=layout.install_command />
                        </div>

                        <div class="flex gap-4 justify-center">
                            <CtaAnchor link=docs anchor_ref=docs_ref />
                            <CtaAnchor link=discord anchor_ref=discord_ref />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Node ref that binds click tracking once its element is mounted
fn track_clicks<T>(binder: &Rc<LinkBinder<HtmlAnchorElement, T>>) -> NodeRef<html::A>
where
    T: LinkTracker<HtmlAnchorElement> + 'static,
{
    let node_ref = NodeRef::<html::A>::new();
    let binder = Rc::clone(binder);
    Effect::new(move |_| {
        binder.bind(node_ref.get().as_ref(), CLICKED_LINK);
    });
    node_ref
}

#[component]
fn CtaAnchor(link: CtaLink, anchor_ref: NodeRef<html::A>) -> impl IntoView {
    view! {
        <a node_ref=anchor_ref class=link.class href=link.href target=link.target>
            {link.label}
        </a>
    }
}
