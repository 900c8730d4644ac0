//! Site Constants
//!
//! Strings baked into the build. `SITE_TITLE`, `SITE_DESCRIPTION` and
//! `DISCORD_URL` may be overridden from the environment at compile time.

pub const SITE_TITLE: &str = match option_env!("SITE_TITLE") {
    Some(title) => title,
    None => "Build Backends Fast",
};

pub const SITE_DESCRIPTION: &str = match option_env!("SITE_DESCRIPTION") {
    Some(description) => description,
    None => "Shuttle is a web application platform that uses traits and annotations to configure your backend deployments.",
};

pub const DISCORD_URL: &str = match option_env!("DISCORD_URL") {
    Some(url) => url,
    None => "https://discord.gg/H33rRDTm3p",
};

pub const DOCS_URL: &str = "https://docs.rs/shuttle-service/latest/shuttle_service/";

pub const INSTALL_COMMAND: &str = "cargo install cargo-shuttle";

pub const ANNOUNCEMENT: &str = "Shuttle is in alpha. Join the Discord to share feedback and get early access to new features.";

/// Read-only bundle of the constants, so components can take them as a value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConstants {
    pub title: &'static str,
    pub description: &'static str,
    pub discord_url: &'static str,
    pub docs_url: &'static str,
    pub install_command: &'static str,
    pub announcement: &'static str,
}

impl Default for SiteConstants {
    fn default() -> Self {
        Self {
            title: SITE_TITLE,
            description: SITE_DESCRIPTION,
            discord_url: DISCORD_URL,
            docs_url: DOCS_URL,
            install_command: INSTALL_COMMAND,
            announcement: ANNOUNCEMENT,
        }
    }
}
