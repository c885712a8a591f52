use std::sync::Arc;

use assetfs_types::AssetMetadata;
use bytes::Bytes;

/// The three build-time lookups an asset set is made of.
///
/// Implementations must satisfy these invariants:
/// - Results never change for the life of the process.
/// - A path with a `blob` also has `metadata`.
/// - A path with `children` has neither a blob nor metadata.
/// - Child lists are ordered; the order is reported as-is.
///
/// Keys passed in are canonical (see [`crate::path::normalize`]), except that
/// the root may also be asked for as `"."`.
pub trait AssetSource: Send + Sync {
    /// Raw bytes of the file at `path`.
    ///
    /// Returns `None` if `path` is not a file. `Bytes` clones share the
    /// underlying buffer, so returning a payload never copies it.
    fn blob(&self, path: &str) -> Option<Bytes>;

    /// Ordered child base names of the directory at `path`.
    ///
    /// Returns `None` if `path` is not a directory.
    fn children(&self, path: &str) -> Option<Vec<String>>;

    /// Metadata captured from the original file at `path`.
    fn metadata(&self, path: &str) -> Option<AssetMetadata>;

    /// Returns `true` if `path` has a blob.
    ///
    /// Default implementation fetches the blob. Sources may override it to
    /// avoid that.
    fn has_blob(&self, path: &str) -> bool {
        self.blob(path).is_some()
    }
}

// Blanket implementations for shared and boxed sources

impl<T: AssetSource + ?Sized> AssetSource for Arc<T> {
    fn blob(&self, path: &str) -> Option<Bytes> {
        self.as_ref().blob(path)
    }

    fn children(&self, path: &str) -> Option<Vec<String>> {
        self.as_ref().children(path)
    }

    fn metadata(&self, path: &str) -> Option<AssetMetadata> {
        self.as_ref().metadata(path)
    }

    fn has_blob(&self, path: &str) -> bool {
        self.as_ref().has_blob(path)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn blob(&self, path: &str) -> Option<Bytes> {
        self.as_ref().blob(path)
    }

    fn children(&self, path: &str) -> Option<Vec<String>> {
        self.as_ref().children(path)
    }

    fn metadata(&self, path: &str) -> Option<AssetMetadata> {
        self.as_ref().metadata(path)
    }

    fn has_blob(&self, path: &str) -> bool {
        self.as_ref().has_blob(path)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn blob(&self, path: &str) -> Option<Bytes> {
        (*self).blob(path)
    }

    fn children(&self, path: &str) -> Option<Vec<String>> {
        (*self).children(path)
    }

    fn metadata(&self, path: &str) -> Option<AssetMetadata> {
        (*self).metadata(path)
    }

    fn has_blob(&self, path: &str) -> bool {
        (*self).has_blob(path)
    }
}
