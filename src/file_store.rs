// Filesystem access for the screenshot directory.
// Every call goes straight to the filesystem; nothing is cached.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File extensions (compared case-insensitively) that count as screenshots.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Wraps the configured screenshot directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Names of the image files directly inside the directory, in directory-iteration order.
    /// A missing or unreadable directory yields an empty list.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    "Cannot read screenshot directory {}: {}",
                    self.directory.display(),
                    e
                );
                return Vec::new();
            }
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| has_image_extension(&entry.path()))
            // DirEntry::file_type does not follow symlinks, so links are skipped
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    /// Size in bytes of a regular file, or `None` when it is absent, not a regular
    /// file (symlinks included), or the name is not a bare filename.
    pub fn stat(&self, filename: &str) -> Option<u64> {
        self.regular_file(filename).map(|(_, len)| len)
    }

    /// Size in bytes of a regular file, 0 when it cannot be found.
    pub fn size_of(&self, filename: &str) -> u64 {
        self.stat(filename).unwrap_or(0)
    }

    /// Full path of a regular file inside the directory, for serving its bytes.
    pub fn file_path(&self, filename: &str) -> Option<PathBuf> {
        self.regular_file(filename).map(|(path, _)| path)
    }

    /// Removes a regular file. Filesystem errors are logged and reported as `false`.
    pub fn delete(&self, filename: &str) -> bool {
        let Some((path, _)) = self.regular_file(filename) else {
            if !is_bare_filename(filename) {
                tracing::warn!("Refusing to delete unsafe filename {:?}", filename);
            }
            return false;
        };

        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Error deleting file {}: {}", filename, e);
                false
            }
        }
    }

    // symlink_metadata keeps links from pointing outside the directory
    fn regular_file(&self, filename: &str) -> Option<(PathBuf, u64)> {
        let path = self.resolve(filename)?;
        let metadata = fs::symlink_metadata(&path).ok()?;
        metadata
            .file_type()
            .is_file()
            .then(|| (path, metadata.len()))
    }

    // Joins only bare names so nothing can resolve outside the directory.
    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        is_bare_filename(filename).then(|| self.directory.join(filename))
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn is_bare_filename(filename: &str) -> bool {
    if filename.is_empty() || filename.contains(['/', '\\']) {
        return false;
    }

    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
