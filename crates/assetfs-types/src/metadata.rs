use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mode::FileMode;

/// Metadata captured from the original on-disk file at build time.
///
/// Only files carry captured metadata. Directories never do, which is why
/// their stat records are synthesized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Length of the original file in bytes.
    pub size: u64,
    /// Mode bits of the original file.
    pub mode: FileMode,
    /// Modification time of the original file.
    pub mod_time: DateTime<Utc>,
}

impl AssetMetadata {
    pub fn new(size: u64, mode: FileMode, mod_time: DateTime<Utc>) -> Self {
        Self {
            size,
            mode,
            mod_time,
        }
    }

    /// Metadata for a payload with no real source file: regular `0o644`,
    /// mtime at the Unix epoch.
    pub fn for_payload(data: &[u8]) -> Self {
        Self {
            size: data.len() as u64,
            mode: FileMode::from_bits(FileMode::REGULAR | 0o644),
            mod_time: DateTime::<Utc>::default(),
        }
    }

    /// Capture metadata from a real file's `std::fs::Metadata`.
    ///
    /// Mode bits are taken from the platform where available. An mtime the
    /// platform cannot report falls back to the epoch.
    pub fn from_fs(meta: &std::fs::Metadata) -> Self {
        let mod_time = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_default();
        Self {
            size: meta.len(),
            mode: FileMode::from_bits(fs_mode_bits(meta)),
            mod_time,
        }
    }
}

#[cfg(unix)]
fn fs_mode_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn fs_mode_bits(meta: &std::fs::Metadata) -> u32 {
    let perm = if meta.permissions().readonly() { 0o444 } else { 0o644 };
    let kind = if meta.is_dir() { FileMode::DIR } else { FileMode::REGULAR };
    kind | perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn for_payload_uses_len_and_epoch() {
        let meta = AssetMetadata::for_payload(b"hi");
        assert_eq!(meta.size, 2);
        assert!(meta.mode.is_regular());
        assert_eq!(meta.mod_time.timestamp(), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let meta = AssetMetadata::new(
            42,
            FileMode::from_bits(0o100600),
            Utc.with_ymd_and_hms(2020, 5, 17, 12, 0, 0).unwrap(),
        );
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"mode\":33152"));
        let back: AssetMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn from_fs_captures_size() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"12345").unwrap();
        file.flush().unwrap();
        let meta = AssetMetadata::from_fs(&file.as_file().metadata().unwrap());
        assert_eq!(meta.size, 5);
        assert!(meta.mode.is_regular());
    }
}
