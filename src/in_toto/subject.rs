//! Artifact digest collection.

use crate::error::{Error, Result};
use crate::hash::{self, SHA256_ALG};
use crate::in_toto::{Subject, make_digest_set};

use log::debug;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Walks the file or directory at `root` and hashes every file beneath it.
///
/// Subjects are named by their path relative to `root`, joined with `/`. When
/// `root` is a single file the subject takes the file's base name. Entries are
/// visited in file-name order. Directories are not recorded and symlinked
/// directories are not descended into.
///
/// # Errors
///
/// - [`Error::NotFound`] if `root` does not exist
/// - [`Error::Walk`] or [`Error::Io`] for any other failure; nothing is
///   returned for a partially walked tree
///
/// # Examples
///
/// ```no_run
/// use actions_provenance::in_toto::collect_subjects;
///
/// let subjects = collect_subjects("dist").unwrap();
/// for s in &subjects {
///     println!("{} {}", s.digest["sha256"], s.name);
/// }
/// ```
pub fn collect_subjects(root: impl AsRef<Path>) -> Result<Vec<Subject>> {
    let root = root.as_ref();

    match fs::metadata(root) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound(root.to_path_buf()));
        }
        Err(e) => return Err(Error::Io(e)),
    }

    let mut subjects = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;

        // links are reported as links; resolve them to decide
        let is_file = if entry.path_is_symlink() {
            fs::metadata(entry.path())?.is_file()
        } else {
            entry.file_type().is_file()
        };
        if !is_file {
            continue;
        }

        let name = subject_name(root, entry.path())?;
        let digest = hash::calculate_file_hash(entry.path())?;
        debug!("hashed {name}: {digest}");

        subjects.push(Subject {
            name,
            digest: make_digest_set(SHA256_ALG, &digest),
        });
    }

    Ok(subjects)
}

fn subject_name(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).map_err(|e| {
        Error::Validation(format!(
            "{} is not under {}: {e}",
            path.display(),
            root.display()
        ))
    })?;

    let parts = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(utf8_name(part, path)),
            _ => None,
        })
        .collect::<Result<Vec<&str>>>()?;

    if !parts.is_empty() {
        return Ok(parts.join("/"));
    }

    // root is the file itself
    let base = root
        .file_name()
        .or_else(|| path.file_name())
        .ok_or_else(|| {
            Error::Validation(format!("Cannot name artifact at {}", root.display()))
        })?;
    Ok(utf8_name(base, path)?.to_string())
}

// subject names must stay unique, so names are never converted lossily
fn utf8_name<'a>(part: &'a OsStr, path: &Path) -> Result<&'a str> {
    part.to_str().ok_or_else(|| {
        Error::Validation(format!(
            "Artifact name is not valid UTF-8: {}",
            path.display()
        ))
    })
}
