use thiserror::Error;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("not found: {0}")]
    NotFound(String),
}

/// Error kind without the human-readable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorKind {
    InvalidArgument,
    AlreadyExists,
    NotFound,
}

impl DirectoryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn kind(&self) -> DirectoryErrorKind {
        match self {
            Self::InvalidArgument(_) => DirectoryErrorKind::InvalidArgument,
            Self::AlreadyExists(_) => DirectoryErrorKind::AlreadyExists,
            Self::NotFound(_) => DirectoryErrorKind::NotFound,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message)
            | Self::AlreadyExists(message)
            | Self::NotFound(message) => message,
        }
    }
}
