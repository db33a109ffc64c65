//! Error kinds for filesystem and process operations.
//!
//! Callers branch on the variant, never on the rendered message.

use std::io;

use thiserror::Error;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
///
/// Every variant carries the virtual path the caller supplied so the rendered
/// message names what was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("directory not empty: {0}")]
    NotEmpty(String),
    #[error("unknown drive: {0}")]
    UnknownDrive(String),
    #[error("trash is unavailable: drive A: is not mounted")]
    TrashUnavailable,
    #[error("io error on {path}: {message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// Wrap a host I/O error for the given virtual path.
    pub fn io(path: impl Into<String>, err: io::Error) -> Self {
        VfsError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Map a host I/O error onto the closest kind, falling back to `Io`.
    pub fn from_io(path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => VfsError::NotFound(path),
            io::ErrorKind::AlreadyExists => VfsError::AlreadyExists(path),
            _ => VfsError::io(path, err),
        }
    }
}

/// An unrecoverable error raised inside a process step.
///
/// Caught at the step boundary and turned into process termination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProcessFault {
    pub message: String,
}

impl ProcessFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build a fault from a caught panic payload.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self::new(format!("panicked: {detail}"))
    }
}

impl From<VfsError> for ProcessFault {
    fn from(err: VfsError) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors raised while spawning an application process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("application '{0}' cannot be run in the background")]
    BackgroundNotAllowed(String),
    #[error("unknown application: {0}")]
    UnknownApplication(String),
}
