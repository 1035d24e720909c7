//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → mono.rs / flux.rs / info.rs (route handlers)
//!     → service call → Mono / Flux
//!     → response.rs (JSON object, JSON array, NDJSON or event stream)
//!     → Send to client
//! ```

pub mod flux;
pub mod info;
pub mod mono;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
