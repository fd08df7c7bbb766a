//! Server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{repository::admin_user, DbService};
use crate::services::EmailService;
use crate::utils::AppError;

/// Shared server state - cheap to clone, handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub db: SqlitePool,
    /// JWT service (Arc-shared)
    pub jwt_service: Arc<JwtService>,
    /// Email notifications; `None` when not configured
    pub email: Option<EmailService>,
}

impl ServerState {
    /// Initialize all services: database + migrations, bootstrap admin,
    /// JWT, email.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.database_path).await?;

        // Bootstrap admin account (first boot only)
        match &config.admin_password {
            Some(password) => {
                admin_user::seed_if_empty(
                    &db_service.pool,
                    &config.admin_username,
                    password,
                    &config.admin_display_name,
                )
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            }
            None => {
                tracing::warn!("ADMIN_PASSWORD not set, skipping bootstrap admin seeding");
            }
        }

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let email = EmailService::from_config(config).await;
        if email.is_none() {
            tracing::info!("Inquiry email notifications disabled (INQUIRY_NOTIFY_TO unset)");
        }

        Ok(Self {
            config: config.clone(),
            db: db_service.pool,
            jwt_service,
            email,
        })
    }

    pub fn get_db(&self) -> &SqlitePool {
        &self.db
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
