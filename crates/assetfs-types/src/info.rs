use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::AssetMetadata;
use crate::mode::{EntryKind, FileMode};

/// The record returned by `stat` and `readdir`.
///
/// File records carry the captured size and mtime with a fixed read-only
/// mode. Directory records are synthesized: zero size, `0o777`, epoch mtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    name: String,
    size: u64,
    mode: FileMode,
    mod_time: DateTime<Utc>,
}

impl FileInfo {
    /// Stat record for an embedded file.
    ///
    /// `name` overrides whatever name the file had when it was captured.
    pub fn file(name: impl Into<String>, meta: &AssetMetadata) -> Self {
        Self {
            name: name.into(),
            size: meta.size,
            mode: FileMode::read_only_file(),
            mod_time: meta.mod_time,
        }
    }

    /// Synthetic stat record for a directory.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            mode: FileMode::synthetic_dir(),
            mod_time: DateTime::<Utc>::default(),
        }
    }

    /// Base name of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }

    pub fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }

    /// Underlying data source. Embedded assets have none.
    pub fn sys(&self) -> Option<&dyn Any> {
        None
    }
}

impl std::fmt::Display for FileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:>10} {} {}",
            self.mode,
            self.size,
            self.mod_time.format("%Y-%m-%d %H:%M:%S"),
            self.name
        )
    }
}
