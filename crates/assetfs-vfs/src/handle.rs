//! Per-open handles.
//!
//! A [`Handle`] is either a file, owning a seekable cursor over the asset's
//! shared bytes, or a directory, owning a listing cursor. Handles are not
//! shared: every mutating call takes `&mut self`.

use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};

use assetfs_types::{AssetMetadata, EntryKind, FileInfo};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::{FsError, FsResult};
use crate::fs::AssetFs;

/// A handle returned by [`AssetFs::open`].
#[derive(Debug)]
pub struct Handle {
    name: String,
    path: String,
    kind: HandleKind,
}

#[derive(Debug)]
enum HandleKind {
    File {
        reader: Cursor<Bytes>,
        metadata: AssetMetadata,
    },
    Dir {
        fs: AssetFs,
        /// Entries already yielded across all listing calls. Never reset.
        cursor: usize,
        listing: Option<Vec<String>>,
    },
}

impl Handle {
    pub(crate) fn file(name: String, path: String, bytes: Bytes, metadata: AssetMetadata) -> Self {
        Self {
            name,
            path,
            kind: HandleKind::File {
                reader: Cursor::new(bytes),
                metadata,
            },
        }
    }

    pub(crate) fn dir(name: String, path: String, fs: AssetFs) -> Self {
        Self {
            name,
            path,
            kind: HandleKind::Dir {
                fs,
                cursor: 0,
                listing: None,
            },
        }
    }

    /// Name the handle was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical registry key.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        match self.kind {
            HandleKind::File { .. } => EntryKind::File,
            HandleKind::Dir { .. } => EntryKind::Dir,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Dir
    }

    /// The file's shared payload, or `None` for a directory.
    pub fn payload(&self) -> Option<Bytes> {
        match &self.kind {
            HandleKind::File { reader, .. } => Some(reader.get_ref().clone()),
            HandleKind::Dir { .. } => None,
        }
    }

    /// Stat record for this handle.
    ///
    /// Files report their captured size and mtime with mode `0o444`.
    /// Directories report size 0, mode `0o777` and an epoch mtime.
    pub fn stat(&self) -> FsResult<FileInfo> {
        Ok(match &self.kind {
            HandleKind::File { metadata, .. } => FileInfo::file(&self.name, metadata),
            HandleKind::Dir { .. } => FileInfo::dir(&self.name),
        })
    }

    /// Stat up to `count` further entries of this directory, in recorded
    /// order.
    ///
    /// `count == 0` returns every remaining entry. Once nothing remains, every
    /// call fails with [`FsError::EndOfDirectory`]. A child that cannot be
    /// opened aborts the whole batch with [`FsError::DataIntegrity`] and
    /// leaves the cursor where it was.
    pub fn readdir(&mut self, count: usize) -> FsResult<Vec<FileInfo>> {
        self.next_page("readdir", count, |fs, dir, name| {
            fs.open_child(dir, name)?.stat()
        })
    }

    /// Like [`readdir`](Self::readdir), but yields child names without
    /// opening the children.
    pub fn readdir_names(&mut self, count: usize) -> FsResult<Vec<String>> {
        self.next_page("readdir_names", count, |_, _, name| Ok(name.to_string()))
    }

    /// Release the handle. Always succeeds; nothing is held open.
    pub fn close(self) -> FsResult<()> {
        debug!(path = %self.path, "closed asset");
        Ok(())
    }

    fn next_page<T, F>(&mut self, op: &'static str, count: usize, mut entry: F) -> FsResult<Vec<T>>
    where
        F: FnMut(&AssetFs, &str, &str) -> FsResult<T>,
    {
        let HandleKind::Dir {
            fs,
            cursor,
            listing,
        } = &mut self.kind
        else {
            return Err(FsError::NotSupported {
                op,
                path: self.path.clone(),
            });
        };

        if listing.is_none() && fs.config().cache_dir_listing {
            *listing = Some(fs.registry().children(&self.path)?);
        }
        let fetched;
        let children = match listing.as_deref() {
            Some(cached) => cached,
            None => {
                fetched = fs.registry().children(&self.path)?;
                fetched.as_slice()
            }
        };

        let remaining = children.get(*cursor..).unwrap_or_default();
        let take = match count {
            0 => remaining.len(),
            n => n.min(remaining.len()),
        };
        if take == 0 {
            return Err(FsError::EndOfDirectory);
        }

        let mut page = Vec::with_capacity(take);
        for name in &remaining[..take] {
            match entry(&*fs, &self.path, name) {
                Ok(item) => page.push(item),
                Err(e) => {
                    warn!(dir = %self.path, child = %name, error = %e, "unreadable directory entry");
                    return Err(integrity_fault(&self.path, name, e));
                }
            }
        }

        *cursor += page.len();
        debug!(dir = %self.path, op, cursor = *cursor, produced = page.len(), "listed directory");
        Ok(page)
    }

    fn reader(&mut self, op: &'static str) -> io::Result<&mut Cursor<Bytes>> {
        match &mut self.kind {
            HandleKind::File { reader, .. } => Ok(reader),
            HandleKind::Dir { .. } => Err(FsError::NotSupported {
                op,
                path: self.path.clone(),
            }
            .into()),
        }
    }
}

fn integrity_fault(dir: &str, name: &str, err: FsError) -> FsError {
    match err {
        FsError::NotFound { path } => FsError::DataIntegrity {
            path,
            reason: format!("listed in directory {dir:?} but does not resolve"),
        },
        FsError::DataIntegrity { .. } => err,
        other => FsError::DataIntegrity {
            path: assetfs_registry::path::join(dir, name),
            reason: other.to_string(),
        },
    }
}

impl Read for Handle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader("read")?.read(buf)
    }
}

impl BufRead for Handle {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader("read")?.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        if let HandleKind::File { reader, .. } = &mut self.kind {
            reader.consume(amt);
        }
    }
}

impl Seek for Handle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.reader("seek")?.seek(pos)
    }
}
