//! Read-only asset registry for assetfs.
//!
//! The registry sits on top of three lookups produced at build time: a blob
//! table (`path -> bytes`), a children table (`dir -> ordered names`) and a
//! metadata table (`path -> size/mode/mtime`). It classifies a path as a file,
//! a directory, or not found. It does no path logic beyond canonicalizing
//! keys.
//!
//! # Sources
//!
//! All lookup backends implement the [`AssetSource`] trait:
//!
//! - [`InMemoryAssets`] -- `HashMap` tables, built programmatically
//! - [`FnAssets`] -- three plain functions, the shape a code generator emits
//!
//! # Design Rules
//!
//! 1. Sources are immutable for the life of the process.
//! 2. Concurrent reads are always safe; no locks are taken.
//! 3. A path is a directory iff it has a children entry.
//! 4. A path is a file iff it has a blob; its metadata must exist too.
//! 5. Keys are canonical: slash-separated, no leading or trailing slash, root is `""`.

pub mod error;
pub mod func;
pub mod memory;
pub mod path;
pub mod registry;
pub mod traits;

pub use error::{RegistryError, RegistryResult};
pub use func::FnAssets;
pub use memory::InMemoryAssets;
pub use registry::{AssetRegistry, Resolved};
pub use traits::AssetSource;

pub use bytes::Bytes;
