//! # mail-tracker
//!
//! The open/click tracking transform for outbound marketing email.
//!
//! Given an email body, a recipient address, and the base URLs of the
//! tracking collectors, [`TrackingTransform`] produces trackable HTML: an
//! invisible open-tracking pixel, a click-tracking anchor around every
//! absolute HTTP(S) URL in the body, and metadata (tracking id, link count)
//! for the caller to persist alongside the send event.
//!
//! The transform is pure: no network, no disk, no shared mutable state.
//! Recording opens and clicks happens later, server-side, when the
//! recipient's mail client requests the pixel or follows a rewritten link.
//! Those collector endpoints are external to this crate; only the URL shape
//! they expect is produced here.
//!
//! ## Quick Start
//!
//! ```
//! use mail_tracker::prelude::*;
//!
//! let config = TrackingConfig::new(
//!     "https://track-open.example.com",
//!     "https://track-click.example.com",
//! );
//! let transform = TrackingTransform::new(config);
//!
//! let result = transform.generate(&TrackingRequest::new(
//!     "Hi {{name}}, visit https://example.com today.",
//!     "user@example.com",
//! ));
//!
//! assert_eq!(result.link_count, 1);
//! assert!(result.tracked_html.starts_with("<img "));
//! ```
//!
//! ## Caller discipline
//!
//! Link wrapping is not idempotent: the URL scanner cannot tell link text
//! from markup, so applying [`TrackingTransform::generate`] (or
//! `wrap_links`) twice to the same content double-wraps the previously
//! generated hrefs. Transform each raw body exactly once.
//!
//! Body text is interpolated into HTML without escaping. Escape untrusted
//! input before it reaches the transform.
//!
//! ## Configuration
//!
//! Collector base URLs come from an explicit [`TrackingConfig`], built
//! programmatically or loaded from `TRACK_OPEN_URL` / `TRACK_CLICK_URL` via
//! [`config::load_from_env`]. See the [`config`] module.
//!
//! [`TrackingTransform`]: tracking::transform::TrackingTransform
//! [`TrackingTransform::generate`]: tracking::transform::TrackingTransform::generate
//! [`TrackingConfig`]: config::TrackingConfig

pub mod config;
pub mod domain;
pub mod error;
pub mod tracking;
pub mod utils;

pub use config::TrackingConfig;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::TrackingConfig;
    pub use crate::domain::entities::{TrackedLink, TrackingRequest, TrackingResult};
    pub use crate::error::AppError;
    pub use crate::tracking::id::{TimestampRandomIdSource, TrackingId, TrackingIdSource};
    pub use crate::tracking::transform::TrackingTransform;
}
