//! Error types for flat properties access.
//!
//! This module provides structured error types using thiserror. Only two
//! conditions are worth a real error value: a file that cannot be read at
//! load time, and an enumerated token that matches nothing. Everything else
//! degrades through the reader's log-and-default path or the builder's
//! error set.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure while constructing a store from a file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read properties file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A comma-separated token that matched no value of the requested
/// enumerated type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Property '{key}' contains an illegal enum value '{token}'")]
pub struct EnumTokenError {
    pub key: String,
    pub token: String,
}

/// Result type alias for store construction.
pub type LoadResult<T> = Result<T, LoadError>;
