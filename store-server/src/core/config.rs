/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file in the
/// working directory is loaded first):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:store.db | SQLite URL (`sqlite::memory:` allowed) |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 8080 | Bind port |
/// | PUBLIC_BASE_URL | (empty) | Prefix for link hrefs |
/// | DB_MAX_CONNECTIONS | 5 | Pool size (in-memory databases always use 1) |
/// | LOG_LEVEL | info | Log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/store.db HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP bind address
    pub http_host: String,
    /// HTTP bind port
    pub http_port: u16,
    /// Prefix for hrefs in response links, e.g. `https://api.example.com`
    pub public_base_url: String,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Default log level
    pub log_level: String,
    /// Log file directory (stdout only when unset)
    pub log_dir: Option<String>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            http_host: std::env::var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_base_url),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.db_max_connections),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Built-in defaults with the database location and port replaced
    ///
    /// Ignores the environment, so tests see the same configuration on every
    /// machine.
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            database_url: database_url.into(),
            http_port,
            ..Self::default()
        }
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:store.db".into(),
            http_host: "0.0.0.0".into(),
            http_port: 8080,
            public_base_url: String::new(),
            db_max_connections: 5,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}
