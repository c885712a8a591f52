//! Foundation types for assetfs.
//!
//! These are the value types shared by the asset registry and the virtual
//! file-system adapter. None of them hold references to asset payloads; they
//! only describe what a `stat` call reports.
//!
//! # Key Types
//!
//! - [`FileMode`] — Unix-style type and permission bits
//! - [`EntryKind`] — Whether a path resolved to a file or a directory
//! - [`AssetMetadata`] — Size, mode and mtime captured from the real file at build time
//! - [`FileInfo`] — The record returned by `stat` and `readdir`

pub mod info;
pub mod metadata;
pub mod mode;

pub use info::FileInfo;
pub use metadata::AssetMetadata;
pub use mode::{EntryKind, FileMode};
