use serde::{Deserialize, Serialize};

/// Whether a path resolved to a file or a directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A blob with captured metadata.
    File,
    /// A path with a recorded child list.
    Dir,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Dir => write!(f, "dir"),
        }
    }
}

/// Unix-style file mode: type bits in `0o170000`, permission bits in `0o777`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMode(u32);

impl FileMode {
    /// Mask covering the file type bits.
    pub const TYPE_MASK: u32 = 0o170000;
    /// Mask covering the permission bits.
    pub const PERM_MASK: u32 = 0o777;
    /// Directory type bit.
    pub const DIR: u32 = 0o040000;
    /// Regular file type bit.
    pub const REGULAR: u32 = 0o100000;

    /// Permissions reported for every embedded file.
    pub const READ_ONLY: u32 = 0o444;
    /// Permissions reported for every synthesized directory.
    pub const TRAVERSABLE: u32 = 0o777;

    /// Wrap raw mode bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Mode of an embedded file: regular, read-only.
    pub const fn read_only_file() -> Self {
        Self(Self::REGULAR | Self::READ_ONLY)
    }

    /// Mode of a synthesized directory: directory, fully traversable.
    pub const fn synthetic_dir() -> Self {
        Self(Self::DIR | Self::TRAVERSABLE)
    }

    /// Raw mode bits.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Permission bits only.
    pub const fn permissions(&self) -> u32 {
        self.0 & Self::PERM_MASK
    }

    /// Type bits only.
    pub const fn file_type(&self) -> u32 {
        self.0 & Self::TYPE_MASK
    }

    pub const fn is_dir(&self) -> bool {
        self.file_type() == Self::DIR
    }

    pub const fn is_regular(&self) -> bool {
        self.file_type() == Self::REGULAR
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Renders like `ls -l`: `drwxrwxrwx`, `-r--r--r--`.
impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_dir() { 'd' } else { '-' };
        write!(f, "{kind}")?;
        const FLAGS: [char; 3] = ['r', 'w', 'x'];
        for shift in (0..9).rev() {
            let set = self.0 & (1 << shift) != 0;
            let flag = FLAGS[2 - (shift % 3) as usize];
            write!(f, "{}", if set { flag } else { '-' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_file_bits() {
        let mode = FileMode::read_only_file();
        assert_eq!(mode.permissions(), 0o444);
        assert!(mode.is_regular());
        assert!(!mode.is_dir());
        assert_eq!(mode.bits(), 0o100444);
    }

    #[test]
    fn synthetic_dir_bits() {
        let mode = FileMode::synthetic_dir();
        assert_eq!(mode.permissions(), 0o777);
        assert!(mode.is_dir());
        assert_eq!(mode.file_type(), FileMode::DIR);
    }

    #[test]
    fn display_like_ls() {
        assert_eq!(FileMode::read_only_file().to_string(), "-r--r--r--");
        assert_eq!(FileMode::synthetic_dir().to_string(), "drwxrwxrwx");
        assert_eq!(FileMode::from_bits(0o100640).to_string(), "-rw-r-----");
    }

    #[test]
    fn entry_kind_display() {
        assert_eq!(EntryKind::File.to_string(), "file");
        assert_eq!(EntryKind::Dir.to_string(), "dir");
    }
}
