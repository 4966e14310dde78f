//! Validation helpers for callers of the transform.

pub mod email;
