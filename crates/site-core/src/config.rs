//! Site Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Result, SiteError};

/// Deployment configuration shared by the frontend build and the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL prefix the site is served under ("" for the domain root)
    pub base_path: String,

    /// Address the server listens on
    pub bind_addr: String,

    /// Directory holding the built frontend
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_path = std::env::var("SITE_BASE_PATH").unwrap_or_default();
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let config = Self {
            base_path: normalize_base_path(&base_path)?,
            bind_addr,
            static_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Base path baked into the frontend at compile time
    pub fn compiled_base_path() -> String {
        normalize_base_path(option_env!("SITE_BASE_PATH").unwrap_or_default()).unwrap_or_else(
            |e| {
                tracing::warn!("{e}, serving from the domain root");
                String::new()
            },
        )
    }

    pub fn validate(&self) -> Result<()> {
        if normalize_base_path(&self.base_path)? != self.base_path {
            return Err(SiteError::Config(format!(
                "base path {:?} is not normalised",
                self.base_path
            )));
        }
        self.socket_addr()?;
        if self.static_dir.as_os_str().is_empty() {
            return Err(SiteError::Config("static directory must not be empty".into()));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| SiteError::Config(format!("bind address {:?}: {}", self.bind_addr, e)))
    }
}

/// Top-level path the server answers itself, never shadowed by the site
pub const RESERVED_SEGMENT: &str = "health";

/// Normalise a base path to either "" or "/segment[/segment...]".
///
/// Segments are limited to unreserved URL characters (`A-Z a-z 0-9 . _ ~ -`)
/// so the prefix matches request paths byte for byte and is a plain literal
/// for the router.
pub fn normalize_base_path(raw: &str) -> Result<String> {
    let invalid = |reason| SiteError::InvalidBasePath {
        path: raw.to_string(),
        reason,
    };

    let stripped = raw.trim().trim_matches('/');
    if stripped.is_empty() {
        return Ok(String::new());
    }

    for segment in stripped.split('/') {
        if segment.is_empty() {
            return Err(invalid("empty path segment"));
        }
        if matches!(segment, "." | "..") {
            return Err(invalid("dot segments are not allowed"));
        }
        if let Some(bad) = segment.chars().find(|&c| !is_unreserved(c)) {
            return Err(invalid(match bad {
                '?' => "query strings are not allowed",
                '#' => "fragments are not allowed",
                c if c.is_whitespace() => "whitespace is not allowed",
                c if !c.is_ascii() => "non-ASCII characters are not allowed",
                _ => "only letters, digits and . _ ~ - are allowed",
            }));
        }
    }

    if stripped.split('/').next() == Some(RESERVED_SEGMENT) {
        return Err(invalid("/health is reserved for the health check"));
    }

    Ok(format!("/{stripped}"))
}

const fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_base_path("").unwrap(), "");
        assert_eq!(normalize_base_path("/").unwrap(), "");
        assert_eq!(normalize_base_path("  ").unwrap(), "");
    }

    #[test]
    fn test_normalize_adds_and_strips_slashes() {
        assert_eq!(normalize_base_path("www").unwrap(), "/www");
        assert_eq!(normalize_base_path("/www/").unwrap(), "/www");
        assert_eq!(normalize_base_path("/a/b").unwrap(), "/a/b");
    }

    #[test]
    fn test_normalize_rejects() {
        assert!(matches!(
            normalize_base_path("/www?x=1"),
            Err(SiteError::InvalidBasePath { .. })
        ));
        assert!(normalize_base_path("/www#top").is_err());
        assert!(normalize_base_path("/my site").is_err());
        assert!(normalize_base_path("/a//b").is_err());
    }

    #[test]
    fn test_normalize_rejects_router_syntax() {
        for raw in [":app", "*", "/{id}", "/docs/*rest", "/a:b"] {
            assert!(
                matches!(normalize_base_path(raw), Err(SiteError::InvalidBasePath { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_rejects_health_prefix() {
        assert!(normalize_base_path("/health").is_err());
        assert!(normalize_base_path("health/").is_err());
        assert!(normalize_base_path("/health/www").is_err());
        assert_eq!(normalize_base_path("/www/health").unwrap(), "/www/health");
        assert_eq!(normalize_base_path("/healthy").unwrap(), "/healthy");
    }

    #[test]
    fn test_normalize_rejects_non_ascii_and_encoded() {
        assert!(normalize_base_path("/café").is_err());
        assert!(normalize_base_path("/caf%C3%A9").is_err());
        assert!(normalize_base_path("/../www").is_err());
    }

    #[test]
    fn test_normalize_accepts_unreserved() {
        assert_eq!(normalize_base_path("/v1.2_beta~x-y").unwrap(), "/v1.2_beta~x-y");
    }

    #[test]
    fn test_validate() {
        assert!(SiteConfig::default().validate().is_ok());

        let config = SiteConfig {
            bind_addr: "not-an-address".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_validate_checks_base_path() {
        let reserved = SiteConfig {
            base_path: "/health".into(),
            ..Default::default()
        };
        assert!(matches!(
            reserved.validate(),
            Err(SiteError::InvalidBasePath { .. })
        ));

        let unnormalised = SiteConfig {
            base_path: "www/".into(),
            ..Default::default()
        };
        assert!(matches!(unnormalised.validate(), Err(SiteError::Config(_))));
    }
}
