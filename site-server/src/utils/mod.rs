//! Utility module - errors, logging, validation

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{ok, ok_with_message, AppError, AppResponse};
pub use result::AppResult;
