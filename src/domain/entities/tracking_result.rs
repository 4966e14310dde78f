//! Output of one tracking transform invocation.

use crate::tracking::id::TrackingId;
use serde::{Deserialize, Serialize};

/// The tracked email body plus the metadata callers persist alongside the
/// send event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingResult {
    /// Fresh id correlating all opens/clicks for this generated email.
    pub tracking_id: TrackingId,
    /// Pixel + link-wrapped body + signature, ready to send.
    pub tracked_html: String,
    /// Number of URLs detected in the raw body.
    pub link_count: usize,
}
