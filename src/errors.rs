/*!
 * Error types for the palavra service.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur in the translation store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error from the underlying database
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Error acquiring the connection lock or joining a blocking task
    #[error("Database task failed: {0}")]
    Task(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Request carried missing, empty, or unsupported values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from a translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the translation store
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
