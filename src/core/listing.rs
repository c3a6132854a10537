//! Directory enumeration
//!
//! Lists the immediate children of a directory and filters them by entry kind
//! or extension. Listings are lazy and come back in whatever order the
//! filesystem yields them; call the function again to restart.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use walkdir::WalkDir;

use crate::error::{ComfortError, IoResultExt, Result};

/// Lazy listing of the direct entries of one directory
pub struct Children {
    inner: walkdir::IntoIter,
}

impl Iterator for Children {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| entry.map(walkdir::DirEntry::into_path).map_err(ComfortError::from))
    }
}

/// Whether a walk should descend into `dir`. Symlinked folders are reported
/// by [`dirs`] but never entered, so a link back to an ancestor cannot loop.
pub(crate) fn is_descendable(dir: &Path) -> bool {
    !dir.is_symlink()
}

/// Check that `path` exists and is a directory.
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).at_path(path)?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(ComfortError::NotADirectory(path.to_path_buf()))
    }
}

/// Files and subfolders in the folder.
///
/// # Errors
///
/// `NotFound` if `path` does not exist, `NotADirectory` if it is a file.
pub fn children<P: AsRef<Path>>(path: P) -> Result<Children> {
    let path = path.as_ref();
    ensure_dir(path)?;
    debug!("Listing {}", path.display());

    let inner = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter();
    Ok(Children { inner })
}

/// Subfolders in the folder
pub fn dirs(path: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    Ok(children(path)?.filter(|entry| entry.as_ref().map_or(true, |p| p.is_dir())))
}

/// Only the files in the folder
pub fn files(path: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    Ok(children(path)?.filter(|entry| entry.as_ref().map_or(true, |p| p.is_file())))
}

/// Suffix of the final path component: `"."` plus the last extension, or an
/// empty string when there is none (`archive.tar.gz` gives `.gz`, `.bashrc`
/// and `notes.` give `""`).
pub fn suffix(path: &Path) -> String {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Files in the folder whose suffix contains `ext`.
///
/// The check is a plain substring test, so `".tx"` also matches `.txt`.
pub fn with_ext<'a>(
    path: &Path,
    ext: &'a str,
) -> Result<impl Iterator<Item = Result<PathBuf>> + 'a> {
    Ok(files(path)?.filter(move |entry| {
        entry
            .as_ref()
            .map_or(true, |p| suffix(p).contains(ext))
    }))
}

/// Files matching [`with_ext`], grouped by their exact suffix.
///
/// Groups keep the order in which each suffix was first seen.
pub fn by_ext(path: &Path, ext: &str) -> Result<IndexMap<String, Vec<PathBuf>>> {
    let mut groups: IndexMap<String, Vec<PathBuf>> = IndexMap::new();
    for entry in with_ext(path, ext)? {
        let file = entry?;
        groups.entry(suffix(&file)).or_default().push(file);
    }
    Ok(groups)
}
