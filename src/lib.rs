//! Mono/Flux demo server library.
//!
//! Single-value and multi-value producers served over HTTP from fixed
//! in-memory data.

// Core
pub mod model;
pub mod reactive;
pub mod service;

// HTTP surface
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
