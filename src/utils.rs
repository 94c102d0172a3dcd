use crate::error::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Open a file for reading after checking what the path points at.
///
/// Directories are refused with [`Error::Validation`]. When `follow_symlinks`
/// is false a symlink is refused as well; otherwise it is opened through its
/// target. A missing path surfaces as [`Error::Io`] with `NotFound` kind.
pub fn safe_open_file(path: &Path, follow_symlinks: bool) -> Result<File> {
    let link_meta = fs::symlink_metadata(path)?;

    if link_meta.file_type().is_symlink() && !follow_symlinks {
        return Err(Error::Validation(format!(
            "Refusing to open symlink: {}",
            path.display()
        )));
    }

    let meta = if link_meta.file_type().is_symlink() {
        fs::metadata(path)?
    } else {
        link_meta
    };

    if !meta.is_file() {
        return Err(Error::Validation(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    Ok(File::open(path)?)
}

/// Create (or truncate) a file for writing.
///
/// An existing symlink at `path` is only written through when
/// `follow_symlinks` is set.
pub fn safe_create_file(path: &Path, follow_symlinks: bool) -> Result<File> {
    if let Ok(meta) = fs::symlink_metadata(path) {
        if meta.file_type().is_symlink() && !follow_symlinks {
            return Err(Error::Validation(format!(
                "Refusing to write through symlink: {}",
                path.display()
            )));
        }
        if meta.is_dir() {
            return Err(Error::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    Ok(file)
}
