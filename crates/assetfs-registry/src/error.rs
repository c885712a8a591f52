use thiserror::Error;

/// Errors from registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The path is neither a file nor a directory.
    #[error("asset not found: {path:?}")]
    NotFound { path: String },

    /// A blob exists but no metadata was captured for it.
    #[error("asset {path:?} has a blob but no captured metadata")]
    MissingMetadata { path: String },

    /// A directory lists a child that resolves to nothing.
    #[error("directory {dir:?} lists {name:?}, which does not resolve")]
    DanglingChild { dir: String, name: String },
}

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
