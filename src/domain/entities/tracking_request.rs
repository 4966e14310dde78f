//! Input to one tracking transform invocation.

use serde::{Deserialize, Serialize};

/// Everything needed to produce a tracked email body for one recipient.
///
/// The body is treated as already-encoded content: the transform never
/// HTML-escapes it. Callers that accept user-supplied text are responsible
/// for escaping before it reaches this type.
///
/// `recipient_name` and `recipient_company` feed the `{{name}}` /
/// `{{company}}` placeholders; a missing value expands to an empty string.
/// `signature_html` is appended verbatim after the tracked body and is
/// never scanned for links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRequest {
    pub body: String,
    pub recipient_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_html: Option<String>,
}

impl TrackingRequest {
    /// Creates a request with no personalization and no signature.
    pub fn new(body: impl Into<String>, recipient_email: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            recipient_email: recipient_email.into(),
            recipient_name: None,
            recipient_company: None,
            signature_html: None,
        }
    }
}
