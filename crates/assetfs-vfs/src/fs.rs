use std::sync::Arc;

use assetfs_registry::{path, AssetRegistry, AssetSource, FnAssets, RegistryError, Resolved};
use assetfs_types::{AssetMetadata, FileInfo};
use bytes::Bytes;
use tracing::debug;

use crate::config::FsConfig;
use crate::error::{FsError, FsResult};
use crate::handle::Handle;

/// A read-only file system over an asset registry.
///
/// Cloning is cheap and clones share the registry. `open` never blocks and
/// never touches a disk; each call returns a fresh, independently owned
/// [`Handle`].
#[derive(Clone, Debug)]
pub struct AssetFs {
    registry: AssetRegistry,
    config: Arc<FsConfig>,
}

impl AssetFs {
    /// File system over `source` with the default configuration.
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self::from_registry(AssetRegistry::new(source), FsConfig::default())
    }

    pub fn with_config(source: impl AssetSource + 'static, config: FsConfig) -> Self {
        Self::from_registry(AssetRegistry::new(source), config)
    }

    pub fn from_registry(registry: AssetRegistry, config: FsConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    /// File system over the three functions an asset generator emits:
    /// directory children, captured metadata, and file bytes.
    pub fn from_fns<C, M, B>(children: C, metadata: M, blob: B) -> Self
    where
        C: Fn(&str) -> Option<Vec<String>> + Send + Sync + 'static,
        M: Fn(&str) -> Option<AssetMetadata> + Send + Sync + 'static,
        B: Fn(&str) -> Option<Bytes> + Send + Sync + 'static,
    {
        Self::new(FnAssets::new(children, metadata, blob))
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn config(&self) -> &FsConfig {
        &self.config
    }

    /// Open `path` as a file or directory handle.
    ///
    /// The path is canonicalized, then joined onto the configured root, so
    /// `..` segments cannot climb out of the root. The
    /// handle is named after the last segment of `path`, not after whatever
    /// name the asset had when it was captured.
    pub fn open(&self, path: &str) -> FsResult<Handle> {
        let key = path::join(&self.config.root, &path::normalize(path));
        self.open_key(path::base_name(path), &key)
            .map_err(|e| match e {
                FsError::NotFound { .. } => FsError::NotFound {
                    path: path.to_string(),
                },
                other => other,
            })
    }

    /// Open `path` and stat it.
    pub fn stat(&self, path: &str) -> FsResult<FileInfo> {
        self.open(path)?.stat()
    }

    /// Open the child `name` of the directory at canonical key `dir`.
    pub(crate) fn open_child(&self, dir: &str, name: &str) -> FsResult<Handle> {
        self.open_key(name.to_string(), &path::join(dir, name))
    }

    fn open_key(&self, name: String, key: &str) -> FsResult<Handle> {
        let handle = match self.registry.resolve(key) {
            Ok(Resolved::File {
                path,
                bytes,
                metadata,
            }) => Handle::file(name, path, bytes, metadata),
            Ok(Resolved::Dir { path, .. }) => Handle::dir(name, path, self.clone()),
            Err(RegistryError::NotFound { path }) => return Err(FsError::NotFound { path }),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %handle.path(), kind = %handle.kind(), "opened asset");
        Ok(handle)
    }
}
