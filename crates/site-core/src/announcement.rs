//! Announcement Bar State
//!
//! The bar's open/closed flag and how it is persisted between visits.

use crate::error::Result;

/// localStorage key holding the dismissed flag
pub const STORAGE_KEY: &str = "announcement-bar-is-closed";

/// Open/closed state of the banner above the hero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnnouncementBarState {
    pub is_closed: bool,
}

impl AnnouncementBarState {
    pub const fn open() -> Self {
        Self { is_closed: false }
    }

    pub const fn closed() -> Self {
        Self { is_closed: true }
    }

    /// Parse a stored value; the value is the JSON encoding of the flag
    pub fn decode(stored: &str) -> Result<Self> {
        let is_closed = serde_json::from_str::<bool>(stored.trim())?;
        Ok(Self { is_closed })
    }

    /// Restore from storage, treating a missing or unreadable value as open
    pub fn restore(stored: Option<&str>) -> Self {
        match stored.map(Self::decode) {
            Some(Ok(state)) => state,
            Some(Err(e)) => {
                tracing::debug!("ignoring stored announcement state: {e}");
                Self::open()
            }
            None => Self::open(),
        }
    }

    pub fn encode(self) -> String {
        // bool always serializes
        serde_json::to_string(&self.is_closed).unwrap_or_else(|_| "false".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore() {
        assert_eq!(AnnouncementBarState::restore(None), AnnouncementBarState::open());
        assert_eq!(AnnouncementBarState::restore(Some("true")), AnnouncementBarState::closed());
        assert_eq!(AnnouncementBarState::restore(Some("false")), AnnouncementBarState::open());
        assert_eq!(AnnouncementBarState::restore(Some("garbage")), AnnouncementBarState::open());
    }

    #[test]
    fn test_decode_rejects_non_bool() {
        assert!(AnnouncementBarState::decode("1").is_err());
        assert!(AnnouncementBarState::decode("\"true\"").is_err());
    }

    #[test]
    fn test_encode_restores() {
        let state = AnnouncementBarState::closed();
        assert_eq!(state.encode(), "true");
        assert_eq!(AnnouncementBarState::restore(Some(&state.encode())), state);
    }
}
