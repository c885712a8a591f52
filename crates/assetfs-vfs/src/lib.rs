//! Virtual file system over embedded assets.
//!
//! [`AssetFs`] presents an [`AssetRegistry`] through the operations a
//! static-file server expects from a real file system: open a path, stat it,
//! list a directory page by page, read and seek a file's bytes. Nothing here
//! touches a disk.
//!
//! # Modules
//!
//! - [`error`] — [`FsError`], including the `EndOfDirectory` sentinel
//! - [`config`] — [`FsConfig`]: trusted root and listing cache
//! - [`fs`] — [`AssetFs`], the entry point
//! - [`handle`] — [`Handle`], one per `open`
//!
//! # Example
//!
//! ```
//! use assetfs_registry::InMemoryAssets;
//! use assetfs_vfs::{AssetFs, FsError};
//!
//! let fs = AssetFs::new(
//!     InMemoryAssets::new()
//!         .with_payload("hello.txt", &b"hi"[..])
//!         .with_dir("hello", ["world.txt"])
//!         .with_payload("hello/world.txt", &b"world"[..]),
//! );
//!
//! assert_eq!(fs.open("hello.txt")?.stat()?.size(), 2);
//!
//! let mut dir = fs.open("hello")?;
//! assert_eq!(dir.readdir(10)?[0].name(), "world.txt");
//! assert!(matches!(dir.readdir(10), Err(FsError::EndOfDirectory)));
//! # Ok::<(), FsError>(())
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod handle;

pub use config::FsConfig;
pub use error::{FsError, FsResult};
pub use fs::AssetFs;
pub use handle::Handle;

pub use assetfs_registry::{AssetRegistry, AssetSource};
pub use assetfs_types::{AssetMetadata, EntryKind, FileInfo, FileMode};
