//! Single-value and multi-value producers.
//!
//! # Data Flow
//! ```text
//! service call
//!     → Mono<T, E>  (0..1 item, or a terminal error; awaited once)
//!     → Flux<T>     (0..N items, pulled one at a time by the consumer)
//!     → http::response framing (JSON object / array / NDJSON / event stream)
//! ```
//!
//! # Design Decisions
//! - Both producers are cold: nothing runs until the value is awaited or polled
//! - `Mono` resolves to `Result<Option<T>, E>` so "empty" and "failed" stay distinct
//! - `Flux` is a boxed `futures_util::Stream`; dropping it cancels emission
//! - Delays use the Tokio timer, never a blocking sleep

pub mod flux;
pub mod mono;

pub use flux::Flux;
pub use mono::Mono;
