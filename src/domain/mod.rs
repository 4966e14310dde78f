//! Core value types for the tracking transform.

pub mod entities;
