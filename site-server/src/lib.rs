//! Mall Site Server - content backend for the mall's public site
//!
//! # Module structure
//!
//! ```text
//! site-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT authentication
//! ├── db/            # SQLite pool, repositories, fallback datasets
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # email notifications
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use self::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
