//! Server State
//!
//! Everything a handler needs, cheap to clone per request.

use shared::error::AppError;

use crate::api::links::LinkBuilder;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{ClientService, OrderService, ProductService};

/// 服务器状态 - 持有数据库连接池和所有服务
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub clients: ClientService,
    pub products: ProductService,
    pub orders: OrderService,
    pub links: LinkBuilder,
}

impl ServerState {
    /// Open the database from `config` and wire up the services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// Build the state over an already opened database
    pub fn with_db(config: Config, db: DbService) -> Self {
        let clients = ClientService::new(db.pool.clone());
        let products = ProductService::new(db.pool.clone());
        let orders = OrderService::new(db.pool.clone(), clients.clone(), products.clone());
        let links = LinkBuilder::new(config.public_base_url.clone());
        Self {
            config,
            db,
            clients,
            products,
            orders,
            links,
        }
    }
}
