//! Shared types for the mall content platform
//!
//! Domain models, localized-text handling, and wire DTOs used by the
//! site server and by client tooling.

pub mod auth;
pub mod locale;
pub mod models;
pub mod util;

// Re-exports
pub use locale::{Locale, LocalizedText};
pub use serde::{Deserialize, Serialize};
