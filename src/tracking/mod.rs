//! The email tracking transform.
//!
//! This module turns a raw email body into trackable HTML: an invisible
//! open-tracking pixel up front and a click-tracking anchor around every
//! absolute HTTP(S) URL in the body. The transform is pure and synchronous;
//! the actual HTTP traffic happens later, when the recipient's mail client
//! loads the pixel or follows a link.
//!
//! - [`id`] - Tracking id generation behind a mockable seam
//! - [`scanner`] - URL detection and trailing-punctuation policy
//! - [`personalize`] - `{{name}}` / `{{company}}` / `{{email}}` expansion
//! - [`transform`] - [`TrackingTransform`], the orchestrating entry point
//!
//! [`TrackingTransform`]: transform::TrackingTransform

pub mod id;
pub mod personalize;
pub mod scanner;
pub mod transform;
