//! Function-backed sources.
//!
//! Asset generators typically emit three free functions rather than a data
//! structure: one returning a file's bytes, one its captured metadata, one a
//! directory's child names. [`FnAssets`] adapts such a triple to
//! [`AssetSource`] without copying any tables.

use assetfs_types::AssetMetadata;
use bytes::Bytes;

use crate::traits::AssetSource;

/// An [`AssetSource`] made of three lookup functions.
pub struct FnAssets<C, M, B> {
    children: C,
    metadata: M,
    blob: B,
}

impl<C, M, B> FnAssets<C, M, B>
where
    C: Fn(&str) -> Option<Vec<String>> + Send + Sync,
    M: Fn(&str) -> Option<AssetMetadata> + Send + Sync,
    B: Fn(&str) -> Option<Bytes> + Send + Sync,
{
    /// Wrap the generator's `children`, `metadata` and `blob` functions.
    pub fn new(children: C, metadata: M, blob: B) -> Self {
        Self {
            children,
            metadata,
            blob,
        }
    }
}

impl<C, M, B> AssetSource for FnAssets<C, M, B>
where
    C: Fn(&str) -> Option<Vec<String>> + Send + Sync,
    M: Fn(&str) -> Option<AssetMetadata> + Send + Sync,
    B: Fn(&str) -> Option<Bytes> + Send + Sync,
{
    fn blob(&self, path: &str) -> Option<Bytes> {
        (self.blob)(path)
    }

    fn children(&self, path: &str) -> Option<Vec<String>> {
        (self.children)(path)
    }

    fn metadata(&self, path: &str) -> Option<AssetMetadata> {
        (self.metadata)(path)
    }
}

impl<C, M, B> std::fmt::Debug for FnAssets<C, M, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAssets").finish_non_exhaustive()
    }
}
