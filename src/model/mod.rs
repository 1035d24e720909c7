//! Entity records exchanged between services and handlers.
//!
//! Both types are plain value carriers: created per request (users) or seeded
//! once at service construction (products), and never mutated afterwards.

pub mod product;
pub mod user;

pub use product::Product;
pub use user::User;
