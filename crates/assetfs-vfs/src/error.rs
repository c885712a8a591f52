//! Error types for file-system operations.

use std::io;

use assetfs_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while opening, listing or reading assets.
#[derive(Debug, Error)]
pub enum FsError {
    /// The path is neither a file nor a directory.
    #[error("file does not exist: {path:?}")]
    NotFound { path: String },

    /// A directory cursor has no further entries.
    ///
    /// Not a failure: listing loops stop when they see it.
    #[error("end of directory")]
    EndOfDirectory,

    /// The embedded asset tables contradict each other.
    ///
    /// The data is static, so retrying cannot help.
    #[error("asset data inconsistent at {path:?}: {reason}")]
    DataIntegrity { path: String, reason: String },

    /// The operation does not apply to this kind of handle.
    #[error("{op} is not supported on {path:?}")]
    NotSupported { op: &'static str, path: String },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_end_of_directory(&self) -> bool {
        matches!(self, Self::EndOfDirectory)
    }
}

impl From<RegistryError> for FsError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { path } => Self::NotFound { path },
            RegistryError::MissingMetadata { path } => Self::DataIntegrity {
                path,
                reason: "blob has no captured metadata".into(),
            },
            RegistryError::DanglingChild { dir, name } => Self::DataIntegrity {
                path: assetfs_registry::path::join(&dir, &name),
                reason: format!("listed in {dir:?} but does not resolve"),
            },
        }
    }
}

/// Maps onto the host's standard error kinds, so handles can stand in for
/// real files.
impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        let kind = match &err {
            FsError::NotFound { .. } => io::ErrorKind::NotFound,
            FsError::EndOfDirectory => io::ErrorKind::UnexpectedEof,
            FsError::DataIntegrity { .. } => io::ErrorKind::InvalidData,
            FsError::NotSupported { .. } => io::ErrorKind::Unsupported,
            FsError::Config(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

/// Convenience type alias for file-system operations.
pub type FsResult<T> = std::result::Result<T, FsError>;
