//! Security hardening subsystem.
//!
//! # Design Decisions
//! - Headers are added after the handler runs, so every route gets them
//! - Toggle lives in `[security] enable_headers`

pub mod headers;
