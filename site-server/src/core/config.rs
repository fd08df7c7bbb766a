//! Server configuration
//!
//! All settings come from environment variables with sensible defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATABASE_PATH | ./data/site.db | SQLite database file |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | CORS_ALLOWED_ORIGIN | (none) | exact origin allowed for browser calls |
//! | ADMIN_USERNAME | admin | bootstrap admin account |
//! | ADMIN_PASSWORD | (none) | bootstrap admin password; seeding skipped when unset |
//! | ADMIN_DISPLAY_NAME | Site Admin | bootstrap admin display name |
//! | INQUIRY_NOTIFY_TO | (none) | inquiry notification recipient; email disabled when unset |
//! | INQUIRY_NOTIFY_FROM | (none) | verified SES sender address |
//! | LOG_DIR | (none) | daily-rolling log file directory |

use crate::auth::JwtConfig;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Exact origin allowed for CORS, if any
    pub cors_allowed_origin: Option<String>,
    /// Bootstrap admin account
    pub admin_username: String,
    /// Bootstrap admin password; no seeding when unset
    pub admin_password: Option<String>,
    pub admin_display_name: String,
    /// Inquiry notification recipient; email disabled when unset
    pub inquiry_notify_to: Option<String>,
    /// Verified SES sender address
    pub inquiry_notify_from: Option<String>,
    /// Log file directory, if file logging is wanted
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/site.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            admin_display_name: std::env::var("ADMIN_DISPLAY_NAME")
                .unwrap_or_else(|_| "Site Admin".into()),
            inquiry_notify_to: std::env::var("INQUIRY_NOTIFY_TO").ok(),
            inquiry_notify_from: std::env::var("INQUIRY_NOTIFY_FROM").ok(),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override database path and port, for tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
