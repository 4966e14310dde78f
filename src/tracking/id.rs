//! Tracking id generation.
//!
//! Every generated email gets a fresh opaque id that correlates its opens
//! and clicks back to one send event. Ids are never reused and never
//! checked for collision; uniqueness is probabilistic (72 random bits plus
//! a millisecond timestamp).

use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of random bytes in the id token before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 9;

/// Prefix marking tracking ids in collector logs.
const ID_PREFIX: &str = "trk";

/// An opaque token correlating all opens/clicks for one generated email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh tracking ids.
///
/// The transform takes this as a seam so tests (and callers with their own
/// id scheme) can control id generation. Production code uses
/// [`TimestampRandomIdSource`].
#[cfg_attr(test, mockall::automock)]
pub trait TrackingIdSource: Send + Sync {
    fn next_id(&self) -> TrackingId;
}

/// Default id source producing `trk_{unix_millis}_{token}`.
///
/// The token is 9 random bytes encoded as URL-safe base64 without padding
/// (12 characters). The timestamp keeps ids sortable and greppable in
/// collector logs; the token carries the entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampRandomIdSource;

impl TrackingIdSource for TimestampRandomIdSource {
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn next_id(&self) -> TrackingId {
        let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);

        TrackingId(format!(
            "{}_{}_{}",
            ID_PREFIX,
            Utc::now().timestamp_millis(),
            token
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_has_expected_shape() {
        let id = TimestampRandomIdSource.next_id();
        let parts: Vec<&str> = id.as_str().splitn(3, '_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "trk");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 12);
    }

    #[test]
    fn test_token_is_url_safe() {
        let id = TimestampRandomIdSource.next_id();
        // The token itself may contain '_', so split off the fixed parts only.
        let token = id.as_str().splitn(3, '_').nth(2).unwrap();

        assert!(
            token
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!token.contains('='));
    }

    #[test]
    fn test_ids_are_unique() {
        let source = TimestampRandomIdSource;
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            ids.insert(source.next_id());
        }

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = TrackingId::new("trk_0_abc");
        assert_eq!(id.to_string(), id.as_str());
    }
}
