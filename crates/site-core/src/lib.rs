//! # site-core
//!
//! Everything about the Shuttle landing page that does not need a browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      site-web (Leptos)                    │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌─────────────┐  │
//! │  │    Hero     │  │ AnnouncementBar  │  │    Code     │  │
//! │  └──────┬──────┘  └────────┬─────────┘  └─────────────┘  │
//! └─────────┼──────────────────┼─────────────────────────────┘
//!           │                  │
//!   ┌───────▼──────┐   ┌───────▼────────┐   ┌──────────────┐
//!   │  HeroLayout  │   │ Announcement   │   │ LinkTracker  │
//!   │   (model)    │   │   BarState     │   │  (Strategy)  │
//!   └──────────────┘   └────────────────┘   └──────────────┘
//! ```
//!
//! The `LinkTracker` trait lets the frontend bind Mixpanel in the browser
//! while tests bind a recording fake.

pub mod announcement;
pub mod config;
pub mod constants;
pub mod error;
pub mod hero;
pub mod tracking;

pub use announcement::AnnouncementBarState;
pub use config::{SiteConfig, normalize_base_path};
pub use constants::SiteConstants;
pub use error::{Result, SiteError};
pub use hero::{CtaLink, HeroLayout};
pub use tracking::{CLICKED_LINK, LinkBinder, LinkTracker};
