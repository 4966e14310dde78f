//! Value types exchanged with the transform.
//!
//! All of these live for a single [`generate`] invocation; nothing here has
//! persistent identity or survives the call.
//!
//! [`generate`]: crate::tracking::transform::TrackingTransform::generate

mod tracked_link;
mod tracking_request;
mod tracking_result;

pub use tracked_link::TrackedLink;
pub use tracking_request::TrackingRequest;
pub use tracking_result::TrackingResult;
