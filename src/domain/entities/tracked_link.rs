//! One click-tracked URL occurrence inside an email body.

use serde::Serialize;

/// A single rewritten link, derived during the body scan.
///
/// One instance per URL occurrence. Repeated URLs are not deduplicated;
/// each occurrence gets its own entry with the same `url` but is rendered
/// as its own anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedLink {
    /// The detected URL after trailing punctuation was stripped. This is
    /// the exact string encoded into the `url` query parameter.
    pub url: String,
    /// Punctuation stripped off the end of the match, re-emitted as plain
    /// text after the closing `</a>` tag.
    pub trailing_punctuation: String,
    /// The full click-collector href the anchor points at.
    pub href: String,
}
