//! Error types for meshcoord

use thiserror::Error;

/// Result type alias using the meshcoord Error
pub type Result<T> = std::result::Result<T, Error>;

/// Meshcoord error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Resource not found: {kind} with id {id}")]
    NotFound { kind: String, id: String },

    #[error("Resource already exists: {kind} with id {id}")]
    AlreadyExists { kind: String, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn not_found(kind: &str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.to_string(),
            id: id.into(),
        }
    }

    pub fn already_exists(kind: &str, id: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind: kind.to_string(),
            id: id.into(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

impl From<Error> for tonic::Status {
    fn from(e: Error) -> Self {
        match e {
            Error::NotFound { kind, id } => {
                tonic::Status::not_found(format!("{} {} not found", kind, id))
            }
            Error::AlreadyExists { kind, id } => {
                tonic::Status::already_exists(format!("{} {} already exists", kind, id))
            }
            Error::InvalidArgument(msg) => tonic::Status::invalid_argument(msg),
            Error::PermissionDenied(msg) => tonic::Status::permission_denied(msg),
            _ => tonic::Status::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let status = tonic::Status::from(Error::not_found("node", "lab/AA:BB"));
        assert_eq!(status.code(), tonic::Code::NotFound);

        let status = tonic::Status::from(Error::invalid("bad address"));
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status = tonic::Status::from(Error::PermissionDenied("no key".into()));
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let status = tonic::Status::from(Error::Internal("disk".into()));
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
