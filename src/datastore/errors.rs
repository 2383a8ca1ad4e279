//! # Data Store Errors

use thiserror::Error;

/// Result type for data store operations
pub type DataStoreResult<T> = Result<T, DataStoreError>;

/// Data store errors
///
/// A missing document is not an error: `get` reports it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataStoreError {
    /// The caller's token lacks the right for the requested action.
    ///
    /// Only produced by the checked operations, never by the engine itself.
    #[error("Access denied")]
    AccessDenied,

    /// The backing tables could not be reached (e.g. a poisoned lock)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DataStoreError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            DataStoreError::AccessDenied => 403,
            DataStoreError::Internal(_) => 500,
        }
    }

    /// Returns true for the access-denied sentinel
    pub fn is_access_denied(&self) -> bool {
        matches!(self, DataStoreError::AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DataStoreError::AccessDenied.status_code(), 403);
        assert_eq!(DataStoreError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_access_denied_is_distinguishable() {
        assert!(DataStoreError::AccessDenied.is_access_denied());
        assert!(!DataStoreError::Internal("Lock poisoned".into()).is_access_denied());
    }
}
