//! Error types for genesys_sync

use std::fmt;

/// Unified error type for fetch, parse, database and file operations
#[derive(Debug)]
pub enum SyncError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// HTTP error status code, with the URL that returned it
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The Genesys page did not contain the expected card table
    MissingTable { table_id: String },
    /// Failed to parse a JSON response
    Json(serde_json::Error),
    /// API answered at the transport level but its payload signals failure
    Api { page: u32, reason: String },
    /// Card database operation failed
    Db(rusqlite::Error),
    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(e) => write!(f, "Network error: {}", e),
            SyncError::HttpStatus { url, status } => {
                write!(f, "HTTP error {} from {}", status, url)
            }
            SyncError::MissingTable { table_id } => {
                write!(f, "Couldn't find the card table with id '{}'", table_id)
            }
            SyncError::Json(e) => write!(f, "JSON parse error: {}", e),
            SyncError::Api { page, reason } => {
                write!(f, "API error on page {}: {}", page, reason)
            }
            SyncError::Db(e) => write!(f, "Database error: {}", e),
            SyncError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Network(e) => Some(e),
            SyncError::Json(e) => Some(e),
            SyncError::Db(e) => Some(e),
            SyncError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Network(err)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Json(err)
    }
}

impl From<rusqlite::Error> for SyncError {
    fn from(err: rusqlite::Error) -> Self {
        SyncError::Db(err)
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Io(err)
    }
}

/// Result alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
