use shared::error::AppError;
use thiserror::Error;

/// Failures that stop the server from starting or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to initialize: {0}")]
    Init(#[from] AppError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
