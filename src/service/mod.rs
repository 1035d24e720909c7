//! Data providers backing the HTTP handlers.
//!
//! # Data Flow
//! ```text
//! UserService    → Mono<User, UserError>   (delayed / immediate / validated)
//! ProductService → Flux<Product | String>  (seeded catalogue, filtered or projected)
//! ```
//!
//! # Design Decisions
//! - Services own their data; handlers only observe results
//! - The product seed is shared read-only (`Arc<[Product]>`), so no locking
//! - Every call builds a fresh producer; no iteration state is shared

pub mod product;
pub mod user;

pub use product::ProductService;
pub use user::{UserError, UserService};
