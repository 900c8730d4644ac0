//! Hero Layout
//!
//! Everything the hero section shows, resolved from the base path and the
//! site constants, plus the root class rule driven by the announcement-bar
//! flag. The Leptos component only renders these.

use crate::announcement::AnnouncementBarState;
use crate::constants::SiteConstants;

pub const ROOT_CLASS: &str = "w-full flex flex-col justify-center bg-dark-700";
pub const MIN_HEIGHT_WITH_BAR: &str = "min-h-[calc(100vh-107px)]";
pub const MIN_HEIGHT_WITHOUT_BAR: &str = "min-h-[calc(100vh-75px)]";

pub const LOGO_PATH: &str = "/images/logo.png";
pub const LOGO_ALT: &str = "Shuttle";
pub const INSTALL_SNIPPET_ID: &str = "cargo-install-cargo-shuttle";

/// Outbound call-to-action link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtaLink {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    /// `Some("_blank")` opens in a new tab
    pub target: Option<&'static str>,
}

impl CtaLink {
    /// Docs link, same tab
    pub const fn get_started(docs_url: &'static str) -> Self {
        Self {
            label: "Get Started",
            href: docs_url,
            class: "text-white font-bold bg-brand-900 hover:bg-brand-700 py-3 px-8 rounded transition",
            target: None,
        }
    }

    /// Discord invite, new tab
    pub const fn join_discord(discord_url: &'static str) -> Self {
        Self {
            label: "Join Discord",
            href: discord_url,
            class: "text-white font-bold bg-brand-purple1 hover:brightness-125 py-3 px-8 rounded transition",
            target: Some("_blank"),
        }
    }
}

/// Resolved hero content; none of it depends on the announcement bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroLayout {
    pub logo_src: String,
    pub logo_alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub snippet_id: &'static str,
    pub install_command: &'static str,
    pub links: [CtaLink; 2],
}

impl HeroLayout {
    pub fn new(base_path: &str, constants: &SiteConstants) -> Self {
        Self {
            logo_src: logo_src(base_path),
            logo_alt: LOGO_ALT,
            title: constants.title,
            description: constants.description,
            snippet_id: INSTALL_SNIPPET_ID,
            install_command: constants.install_command,
            links: [
                CtaLink::get_started(constants.docs_url),
                CtaLink::join_discord(constants.discord_url),
            ],
        }
    }
}

/// Root classes: the fixed set plus exactly one min-height rule
pub fn root_class(bar: AnnouncementBarState) -> String {
    let min_height = if bar.is_closed {
        MIN_HEIGHT_WITHOUT_BAR
    } else {
        MIN_HEIGHT_WITH_BAR
    };
    format!("{ROOT_CLASS} {min_height}")
}

/// Whether a space-separated class list contains `class`
pub fn has_class(class_list: &str, class: &str) -> bool {
    class_list.split_whitespace().any(|c| c == class)
}

pub fn logo_src(base_path: &str) -> String {
    format!("{base_path}{LOGO_PATH}")
}
