//! Global error handling for muso
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project. Classification and rule evaluation never
//! error; only directory enumeration failures and configuration problems
//! surface here.

use std::io;
use thiserror::Error;

/// Global error type for muso operations
#[derive(Error, Debug)]
pub enum MusoError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Collection walk errors
    #[error("Walk error: {0}")]
    Walk(String),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Specialized Result type for muso operations
pub type Result<T> = std::result::Result<T, MusoError>;

/// Creates a MusoError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::MusoError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
