//! Store Server - 客户、商品和订单的 REST 服务
//!
//! # 架构概述
//!
//! 请求经过 `api` 处理器进入 `services`，再由 `db::repository` 读写 SQLite。
//! 订单服务通过客户和商品服务解析引用。
//!
//! # 模块结构
//!
//! ```text
//! store-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务规则
//! ├── db/            # 连接池和仓储
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志初始化
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use shared::error::{AppError, AppResult, ErrorCode};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let config = Config::from_env();
    utils::init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    );
    if dotenv_loaded {
        tracing::debug!("Loaded .env file");
    }
    config
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_____  ________
  \__ \/ __/ __ \/ ___/ _ \
 ___/ / /_/ /_/ / /  /  __/
/____/\__/\____/_/   \___/
    "#
    );
}
