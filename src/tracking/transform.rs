//! The tracking transform itself.
//!
//! [`TrackingTransform`] rewrites an email body so every absolute HTTP(S)
//! URL becomes a click-tracked hyperlink and an invisible open-tracking
//! pixel is prepended, without corrupting surrounding text, punctuation, or
//! an appended signature block.
//!
//! The transform is pure and synchronous. It may be invoked concurrently
//! for different recipients without coordination; each call produces its
//! own fresh tracking id.

use crate::config::TrackingConfig;
use crate::domain::entities::{TrackedLink, TrackingRequest, TrackingResult};
use crate::tracking::id::{TimestampRandomIdSource, TrackingId, TrackingIdSource};
use crate::tracking::personalize::apply_placeholders;
use crate::tracking::scanner::{self, LinkMatch};
use base64::Engine as _;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Write as _;
use std::sync::Arc;

/// Inline style on generated anchors, so tracked links still render like
/// links in mail clients that strip stylesheets.
const ANCHOR_STYLE: &str = "color: #1a73e8; text-decoration: underline;";

/// Percent-encoding set equivalent to JavaScript's `encodeURIComponent`:
/// everything except alphanumerics and `-_.!~*'()` is escaped.
const RECIPIENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Rewrites email bodies into open/click-trackable HTML.
///
/// Holds the collector base URLs and a tracking id source; everything else
/// is per-call input.
pub struct TrackingTransform {
    config: TrackingConfig,
    ids: Arc<dyn TrackingIdSource>,
}

impl TrackingTransform {
    /// Creates a transform with the default timestamp+random id source.
    pub fn new(config: TrackingConfig) -> Self {
        Self::with_id_source(config, Arc::new(TimestampRandomIdSource))
    }

    /// Creates a transform with a caller-supplied id source.
    pub fn with_id_source(config: TrackingConfig, ids: Arc<dyn TrackingIdSource>) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Builds the 1x1 hidden open-tracking pixel.
    ///
    /// The pixel `src` is `{open_base_url}?id={id}&email={recipient}`.
    /// Always succeeds.
    pub fn build_pixel(&self, tracking_id: &TrackingId, recipient_email: &str) -> String {
        let pixel_url = format!(
            "{}?id={}&email={}",
            self.config.open_base_url,
            tracking_id,
            encode_recipient(recipient_email)
        );

        format!(r#"<img src="{pixel_url}" width="1" height="1" style="display:none;" alt="" />"#)
    }

    /// Returns the per-occurrence anchor data [`wrap_links`] renders.
    ///
    /// [`wrap_links`]: Self::wrap_links
    pub fn tracked_links(
        &self,
        text: &str,
        tracking_id: &TrackingId,
        recipient_email: &str,
    ) -> Vec<TrackedLink> {
        scanner::scan(text)
            .into_iter()
            .map(|m| TrackedLink {
                href: self.tracked_href(&m.url, tracking_id, recipient_email),
                url: m.url,
                trailing_punctuation: m.trailing_punctuation,
            })
            .collect()
    }

    /// Replaces every detected URL with a click-tracked anchor.
    ///
    /// The detected URL is base64-encoded into the `url` query parameter of
    /// the click-collector href; stripped trailing punctuation is re-emitted
    /// as plain text after the closing `</a>`. Text without URLs is returned
    /// unchanged.
    ///
    /// Not idempotent: the scanner does not distinguish link text from
    /// markup, so applying this to its own output double-wraps the hrefs it
    /// generated. Apply exactly once per raw body.
    pub fn wrap_links(
        &self,
        text: &str,
        tracking_id: &TrackingId,
        recipient_email: &str,
    ) -> String {
        let matches = scanner::scan(text);
        if matches.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() * 2);
        let mut cursor = 0;

        for m in &matches {
            out.push_str(&text[cursor..m.start]);
            self.render_anchor(&mut out, m, tracking_id, recipient_email);
            cursor = m.end;
        }
        out.push_str(&text[cursor..]);

        out
    }

    /// Orchestrates one full transform invocation.
    ///
    /// Fresh id, link count from the raw body, newline normalization,
    /// placeholder expansion, link wrapping, pixel up front, signature
    /// appended verbatim. No error path: an empty body yields a pixel-only
    /// result with `link_count == 0`.
    pub fn generate(&self, request: &TrackingRequest) -> TrackingResult {
        let tracking_id = self.ids.next_id();
        let link_count = scanner::count_links(&request.body);

        let body_html = normalize_body(&request.body);
        let personalized = apply_placeholders(
            &body_html,
            &request.recipient_email,
            request.recipient_name.as_deref(),
            request.recipient_company.as_deref(),
        );

        let linked_body = self.wrap_links(&personalized, &tracking_id, &request.recipient_email);
        let pixel = self.build_pixel(&tracking_id, &request.recipient_email);
        let signature = request.signature_html.as_deref().unwrap_or("");

        let tracked_html = format!("{pixel}{linked_body}{signature}");

        tracing::debug!(
            tracking_id = %tracking_id,
            link_count,
            recipient = %request.recipient_email,
            "generated tracked email body"
        );

        TrackingResult {
            tracking_id,
            tracked_html,
            link_count,
        }
    }

    fn tracked_href(&self, url: &str, tracking_id: &TrackingId, recipient_email: &str) -> String {
        format!(
            "{}?id={}&email={}&url={}",
            self.config.click_base_url,
            tracking_id,
            encode_recipient(recipient_email),
            base64::engine::general_purpose::STANDARD.encode(url)
        )
    }

    fn render_anchor(
        &self,
        out: &mut String,
        m: &LinkMatch,
        tracking_id: &TrackingId,
        recipient_email: &str,
    ) {
        let href = self.tracked_href(&m.url, tracking_id, recipient_email);

        // Infallible: fmt::Write to a String cannot fail.
        let _ = write!(
            out,
            r#"<a href="{href}" style="{ANCHOR_STYLE}">{url}</a>{punctuation}"#,
            url = m.url,
            punctuation = m.trailing_punctuation,
        );
    }
}

/// Converts bare newlines to `<br>` unless the body already looks like an
/// HTML document (contains `<html` or `<body`). Best-effort normalization,
/// not an HTML converter.
fn normalize_body(body: &str) -> String {
    if body.contains("<html") || body.contains("<body") {
        body.to_string()
    } else {
        body.replace('\n', "<br>")
    }
}

/// Percent-encodes a recipient email for use as a query parameter value.
fn encode_recipient(email: &str) -> String {
    utf8_percent_encode(email, RECIPIENT_ENCODE_SET).to_string()
}
