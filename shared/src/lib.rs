//! Shared types for the store service
//!
//! Domain models, request payloads and the unified error system used by the
//! server and by anything that talks to its API.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Client, ClientPayload, Order, OrderPayload, Product, ProductPayload};
