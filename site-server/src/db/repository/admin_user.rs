//! Admin User Repository

use sqlx::SqlitePool;

use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

/// Admin account row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl AdminUser {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{PasswordHash, PasswordVerifier},
            Argon2,
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminUser>> {
    let row = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, display_name, is_active, created_at, updated_at FROM admin_user WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AdminUser>> {
    let row = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, display_name, is_active, created_at, updated_at FROM admin_user WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Seed the bootstrap admin account if no account exists yet.
pub async fn seed_if_empty(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    display_name: &str,
) -> RepoResult<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_user")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let hash = AdminUser::hash_password(password)
        .map_err(|e| RepoError::Database(format!("Failed to hash bootstrap password: {e}")))?;
    let now = now_millis();
    sqlx::query(
        "INSERT INTO admin_user (id, username, password_hash, display_name, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(snowflake_id())
    .bind(username)
    .bind(hash)
    .bind(display_name)
    .bind(now)
    .execute(pool)
    .await?;

    tracing::info!(username, "Bootstrap admin account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn seed_creates_account_once() {
        let pool = test_pool().await;
        seed_if_empty(&pool, "admin", "correct-horse", "Site Admin").await.unwrap();
        seed_if_empty(&pool, "admin2", "other-pass", "Other").await.unwrap();

        assert!(find_by_username(&pool, "admin").await.unwrap().is_some());
        // second seed is a no-op: an account already existed
        assert!(find_by_username(&pool, "admin2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn password_verification() {
        let pool = test_pool().await;
        seed_if_empty(&pool, "admin", "correct-horse", "Site Admin").await.unwrap();
        let user = find_by_username(&pool, "admin").await.unwrap().unwrap();

        assert!(user.verify_password("correct-horse").unwrap());
        assert!(!user.verify_password("wrong-horse").unwrap());
    }
}
