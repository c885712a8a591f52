use std::sync::Arc;

use assetfs_types::{AssetMetadata, EntryKind};
use bytes::Bytes;
use tracing::{trace, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::path::{self, ROOT_KEYS};
use crate::traits::AssetSource;

/// What a path resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A file: its shared payload and captured metadata.
    File {
        path: String,
        bytes: Bytes,
        metadata: AssetMetadata,
    },
    /// A directory: its ordered child names.
    Dir { path: String, children: Vec<String> },
}

impl Resolved {
    /// Canonical path that was resolved.
    pub fn path(&self) -> &str {
        match self {
            Self::File { path, .. } | Self::Dir { path, .. } => path,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::File { .. } => EntryKind::File,
            Self::Dir { .. } => EntryKind::Dir,
        }
    }
}

/// Process-wide, read-only view over an [`AssetSource`].
///
/// Cloning is cheap: clones share the same source. Every lookup is a direct
/// key match on the canonical path; there is no prefix or wildcard matching.
#[derive(Clone)]
pub struct AssetRegistry {
    source: Arc<dyn AssetSource>,
}

impl AssetRegistry {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Classify `path` as a file, a directory, or not found.
    ///
    /// The blob table is consulted first, so a path a source reports as both
    /// resolves as a file.
    pub fn resolve(&self, path: &str) -> RegistryResult<Resolved> {
        let key = path::normalize(path);
        trace!(path = %key, "resolving asset");

        if let Some(bytes) = self.source.blob(&key) {
            let metadata = self
                .source
                .metadata(&key)
                .ok_or_else(|| RegistryError::MissingMetadata { path: key.clone() })?;
            if self.lookup_children(&key).is_some() {
                warn!(path = %key, "asset is both a file and a directory; treating as file");
            }
            return Ok(Resolved::File {
                path: key,
                bytes,
                metadata,
            });
        }

        match self.lookup_children(&key) {
            Some(children) => Ok(Resolved::Dir {
                path: key,
                children,
            }),
            None => Err(RegistryError::NotFound { path: key }),
        }
    }

    /// Ordered child names of the directory at `path`.
    pub fn children(&self, path: &str) -> RegistryResult<Vec<String>> {
        let key = path::normalize(path);
        self.lookup_children(&key)
            .ok_or(RegistryError::NotFound { path: key })
    }

    /// Returns `true` if `path` resolves to a file.
    pub fn is_file(&self, path: &str) -> bool {
        self.source.has_blob(&path::normalize(path))
    }

    /// Returns `true` if `path` resolves to a directory.
    pub fn is_dir(&self, path: &str) -> bool {
        let key = path::normalize(path);
        !self.source.has_blob(&key) && self.lookup_children(&key).is_some()
    }

    /// Walk the whole tree from the root and check that every listed child
    /// resolves and every file has metadata.
    ///
    /// Returns the number of entries visited, root included.
    pub fn verify(&self) -> RegistryResult<usize> {
        let mut visited = 0;
        let mut pending = vec![String::new()];
        while let Some(dir) = pending.pop() {
            visited += 1;
            for name in self.children(&dir)? {
                let child = path::join(&dir, &name);
                match self.resolve(&child) {
                    Ok(resolved) if resolved.kind() == EntryKind::Dir => {
                        pending.push(resolved.path().to_string());
                    }
                    Ok(_) => visited += 1,
                    Err(RegistryError::NotFound { .. }) => {
                        return Err(RegistryError::DanglingChild { dir, name });
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(visited)
    }

    fn lookup_children(&self, key: &str) -> Option<Vec<String>> {
        if key.is_empty() {
            return ROOT_KEYS.iter().find_map(|root| self.source.children(root));
        }
        self.source.children(key)
    }
}

impl std::fmt::Debug for AssetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::FnAssets;
    use crate::memory::InMemoryAssets;

    fn registry() -> AssetRegistry {
        AssetRegistry::new(
            InMemoryAssets::new()
                .with_dir("", ["hello.txt", "hello"])
                .with_payload("hello.txt", &b"hi"[..])
                .with_dir("hello", ["bar.txt", "world.txt"])
                .with_payload("hello/bar.txt", &b"bar"[..])
                .with_payload("hello/world.txt", &b"world"[..]),
        )
    }

    // -----------------------------------------------------------------------
    // resolve
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_file() {
        let resolved = registry().resolve("hello.txt").unwrap();
        assert_eq!(resolved.kind(), EntryKind::File);
        match resolved {
            Resolved::File {
                path,
                bytes,
                metadata,
            } => {
                assert_eq!(path, "hello.txt");
                assert_eq!(&bytes[..], b"hi");
                assert_eq!(metadata.size, 2);
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[test]
    fn resolve_dir() {
        let resolved = registry().resolve("/hello/").unwrap();
        assert_eq!(resolved.path(), "hello");
        assert_eq!(
            resolved,
            Resolved::Dir {
                path: "hello".into(),
                children: vec!["bar.txt".into(), "world.txt".into()],
            }
        );
    }

    #[test]
    fn resolve_root_forms() {
        let reg = registry();
        for root in ["", "/", ".", "./"] {
            let resolved = reg.resolve(root).unwrap();
            assert_eq!(resolved.kind(), EntryKind::Dir, "root form {root:?}");
            assert_eq!(resolved.path(), "");
        }
    }

    #[test]
    fn resolve_root_stored_under_dot() {
        let source = FnAssets::new(
            |p: &str| (p == ".").then(|| vec!["a.txt".to_string()]),
            |_: &str| None,
            |_: &str| None,
        );
        let reg = AssetRegistry::new(source);
        assert!(reg.is_dir(""));
        assert_eq!(reg.children("/").unwrap(), vec!["a.txt".to_string()]);
    }

    #[test]
    fn resolve_missing() {
        let err = registry().resolve("nonexistent/path").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nonexistent/path"));
    }

    #[test]
    fn no_prefix_matching() {
        let reg = registry();
        assert!(reg.resolve("hell").unwrap_err().is_not_found());
        assert!(reg.resolve("hello.tx").unwrap_err().is_not_found());
    }

    #[test]
    fn blob_without_metadata_is_integrity_fault() {
        let source = FnAssets::new(
            |_: &str| None,
            |_: &str| None,
            |p: &str| (p == "orphan.bin").then(|| Bytes::from_static(b"x")),
        );
        let err = AssetRegistry::new(source).resolve("orphan.bin").unwrap_err();
        assert!(matches!(err, RegistryError::MissingMetadata { .. }));
    }

    #[test]
    fn file_wins_over_dir() {
        let assets = InMemoryAssets::new()
            .with_payload("both", &b"data"[..])
            .with_dir("both", ["x"]);
        let reg = AssetRegistry::new(assets);
        assert_eq!(reg.resolve("both").unwrap().kind(), EntryKind::File);
        assert!(reg.is_file("both"));
        assert!(!reg.is_dir("both"));
    }

    // -----------------------------------------------------------------------
    // verify
    // -----------------------------------------------------------------------

    #[test]
    fn verify_consistent_tree() {
        // root, hello.txt, hello, bar.txt, world.txt
        assert_eq!(registry().verify().unwrap(), 5);
    }

    #[test]
    fn verify_descends_into_nested_dirs() {
        let assets = InMemoryAssets::from_files([
            ("a/b/c.txt", &b"c"[..], AssetMetadata::for_payload(b"c")),
            ("a/d.txt", &b"d"[..], AssetMetadata::for_payload(b"d")),
        ]);
        // root, a, b, c.txt, d.txt
        assert_eq!(AssetRegistry::new(assets).verify().unwrap(), 5);
    }

    #[test]
    fn verify_reports_dangling_child() {
        let assets = InMemoryAssets::new()
            .with_dir("", ["docs"])
            .with_dir("docs", ["missing.md"]);
        let err = AssetRegistry::new(assets).verify().unwrap_err();
        match err {
            RegistryError::DanglingChild { dir, name } => {
                assert_eq!(dir, "docs");
                assert_eq!(name, "missing.md");
            }
            other => panic!("expected dangling child, got {other:?}"),
        }
    }

    #[test]
    fn clones_share_source() {
        let reg = registry();
        let clone = reg.clone();
        let a = reg.resolve("hello.txt").unwrap();
        let b = clone.resolve("hello.txt").unwrap();
        match (a, b) {
            (Resolved::File { bytes: x, .. }, Resolved::File { bytes: y, .. }) => {
                assert_eq!(x.as_ptr(), y.as_ptr());
            }
            _ => panic!("expected files"),
        }
    }
}
