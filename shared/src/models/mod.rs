//! Data models
//!
//! Shared between the store server and API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are UUID v4, assigned by the store on insert.

pub mod client;
pub mod order;
pub mod product;
pub mod validation;

// Re-exports
pub use client::*;
pub use order::*;
pub use product::*;
