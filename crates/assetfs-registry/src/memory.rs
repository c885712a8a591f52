//! In-memory asset tables.
//!
//! [`InMemoryAssets`] keeps the blob, children and metadata tables in plain
//! `HashMap`s. It is filled once, through the builder methods, and then
//! handed to an [`AssetRegistry`](crate::AssetRegistry) which never mutates
//! it again.

use std::collections::HashMap;

use assetfs_types::AssetMetadata;
use bytes::Bytes;

use crate::path::{self, ROOT_KEYS};
use crate::traits::AssetSource;

/// HashMap-backed [`AssetSource`].
///
/// Every key is canonicalized on insertion. Payloads are stored as `Bytes`,
/// so reads hand out shared views instead of copies.
#[derive(Clone, Default)]
pub struct InMemoryAssets {
    blobs: HashMap<String, Bytes>,
    children: HashMap<String, Vec<String>>,
    metadata: HashMap<String, AssetMetadata>,
}

impl InMemoryAssets {
    /// Create an empty asset set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an asset set from files alone, deriving the directory tree.
    ///
    /// Every ancestor of every file becomes a directory. Children are listed
    /// in the order they are first seen.
    pub fn from_files<I, P, D>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, D, AssetMetadata)>,
        P: AsRef<str>,
        D: Into<Bytes>,
    {
        let mut assets = Self::new();
        assets.children.entry(String::new()).or_default();
        for (file_path, data, meta) in files {
            let key = path::normalize(file_path.as_ref());
            let mut child = key.clone();
            while let Some((parent, name)) = child.rsplit_once(path::SEPARATOR) {
                assets.link_child(parent, name);
                child = parent.to_string();
            }
            assets.link_child("", &child);
            assets.insert_file(&key, data, meta);
        }
        assets
    }

    /// Builder form of [`insert_file`](Self::insert_file).
    pub fn with_file(mut self, path: &str, data: impl Into<Bytes>, meta: AssetMetadata) -> Self {
        self.insert_file(path, data, meta);
        self
    }

    /// Builder form of [`insert_payload`](Self::insert_payload).
    pub fn with_payload(mut self, path: &str, data: impl Into<Bytes>) -> Self {
        self.insert_payload(path, data);
        self
    }

    /// Builder form of [`insert_dir`](Self::insert_dir).
    pub fn with_dir<I, S>(mut self, path: &str, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_dir(path, children);
        self
    }

    /// Register a file with its captured metadata.
    pub fn insert_file(&mut self, path: &str, data: impl Into<Bytes>, meta: AssetMetadata) {
        let key = path::normalize(path);
        self.blobs.insert(key.clone(), data.into());
        self.metadata.insert(key, meta);
    }

    /// Register a file with metadata derived from the payload itself.
    pub fn insert_payload(&mut self, path: &str, data: impl Into<Bytes>) {
        let data = data.into();
        let meta = AssetMetadata::for_payload(&data);
        self.insert_file(path, data, meta);
    }

    /// Register a directory with its ordered child names.
    ///
    /// Names are stored exactly as given: no sorting, no deduplication.
    pub fn insert_dir<I, S>(&mut self, path: &str, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = children.into_iter().map(Into::into).collect();
        self.children.insert(path::normalize(path), names);
    }

    /// Number of files.
    pub fn file_count(&self) -> usize {
        self.blobs.len()
    }

    /// Number of directories.
    pub fn dir_count(&self) -> usize {
        self.children.len()
    }

    /// Total payload bytes across all files.
    pub fn total_bytes(&self) -> u64 {
        self.blobs.values().map(|b| b.len() as u64).sum()
    }

    fn link_child(&mut self, parent: &str, name: &str) {
        let names = self.children.entry(parent.to_string()).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    fn key<'a>(&self, path: &'a str) -> &'a str {
        if ROOT_KEYS.contains(&path) {
            ""
        } else {
            path
        }
    }
}

impl AssetSource for InMemoryAssets {
    fn blob(&self, path: &str) -> Option<Bytes> {
        self.blobs.get(self.key(path)).cloned()
    }

    fn children(&self, path: &str) -> Option<Vec<String>> {
        self.children.get(self.key(path)).cloned()
    }

    fn metadata(&self, path: &str) -> Option<AssetMetadata> {
        self.metadata.get(self.key(path)).cloned()
    }

    fn has_blob(&self, path: &str) -> bool {
        self.blobs.contains_key(self.key(path))
    }
}

impl std::fmt::Debug for InMemoryAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAssets")
            .field("file_count", &self.file_count())
            .field("dir_count", &self.dir_count())
            .field("total_bytes", &self.total_bytes())
            .finish()
    }
}
