//! Authentication module
//!
//! JWT-based admin authentication. Tokens are accepted from the
//! `Authorization: Bearer` header or the `session` cookie.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_admin;

/// Authenticated admin identity, injected into request extensions by
/// [`require_admin`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub.parse().unwrap_or(0),
            username: claims.username,
        }
    }
}
