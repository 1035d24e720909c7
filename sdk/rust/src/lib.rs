//! Typed client for the Mono/Flux demo server.

pub mod client;
pub mod decode;

pub use client::{ClientError, DemoClient, Product, User};
