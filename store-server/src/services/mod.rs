//! 服务层 - 业务规则
//!
//! # 服务列表
//!
//! - [`ClientService`] - client CRUD with the order reference guard
//! - [`ProductService`] - product CRUD with the order reference guard
//! - [`OrderService`] - order CRUD, resolves the client and product references
//!
//! Services validate payloads, translate [`RepoError`](crate::db::repository::RepoError)
//! into entity-specific [`AppError`](shared::error::AppError)s and log every mutation.

pub mod client_service;
pub mod order_service;
pub mod product_service;

pub use client_service::ClientService;
pub use order_service::OrderService;
pub use product_service::ProductService;
