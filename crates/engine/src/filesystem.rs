use crate::error::{EngineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One immediate child of the listed directory.
///
/// `name` is surfaced via lossy UTF-8 conversion of the OS name. `is_dir`
/// reflects the entry's own file type without following symlinks, so a
/// symlink to a directory is listed like any other file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Lazy stream of [`Entry`] records for one directory.
///
/// Wraps `fs::ReadDir`, so the underlying handle is released when the
/// iterator is dropped, on success and error paths alike. `.` and `..`
/// never appear.
#[derive(Debug)]
pub struct Entries {
    inner: fs::ReadDir,
    dir: PathBuf,
}

impl Iterator for Entries {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let dirent = match self.inner.next()? {
            Ok(d) => d,
            Err(e) => return Some(Err(self.unavailable(e))),
        };
        let is_dir = match dirent.file_type() {
            Ok(ft) => ft.is_dir(),
            Err(e) => return Some(Err(self.unavailable(e))),
        };
        Some(Ok(Entry {
            name: dirent.file_name().to_string_lossy().into_owned(),
            is_dir,
        }))
    }
}

impl Entries {
    fn unavailable(&self, source: std::io::Error) -> EngineError {
        EngineError::DirectoryUnavailable {
            path: self.dir.clone(),
            source,
        }
    }
}

/// Open `dir` for enumeration of its immediate children.
///
/// Yield order is whatever the OS returns; callers must not rely on it.
///
/// # Errors
///
/// Returns [`EngineError::DirectoryUnavailable`] when the path is missing,
/// is not a directory, or cannot be read.
pub fn read_entries(dir: &Path) -> Result<Entries> {
    let inner = fs::read_dir(dir).map_err(|e| EngineError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(Entries {
        inner,
        dir: dir.to_path_buf(),
    })
}
