//! Bulk renaming by substring substitution
//!
//! Renames happen one file at a time, straight on disk. A failure stops the
//! batch and is returned as is; whatever was renamed before it stays renamed.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::core::listing;
use crate::error::{ComfortError, IoResultExt, Result};

/// The set of files a rename operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTarget {
    /// Just this file
    SingleFile(PathBuf),
    /// The immediate files of this directory (not recursive)
    Directory(PathBuf),
    /// A list of files built by the caller
    ExplicitList(Vec<PathBuf>),
}

impl FileTarget {
    /// Pick `SingleFile` or `Directory` depending on what `path` is on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).at_path(path)?;
        if metadata.is_dir() {
            Ok(FileTarget::Directory(path.to_path_buf()))
        } else {
            Ok(FileTarget::SingleFile(path.to_path_buf()))
        }
    }

    /// Expand the target into the files it covers.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        match self {
            FileTarget::SingleFile(path) => Ok(vec![path.clone()]),
            FileTarget::Directory(dir) => listing::files(dir)?.collect(),
            FileTarget::ExplicitList(paths) => Ok(paths.clone()),
        }
    }
}

impl From<Vec<PathBuf>> for FileTarget {
    fn from(paths: Vec<PathBuf>) -> Self {
        FileTarget::ExplicitList(paths)
    }
}

/// One rename that was carried out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ComfortError::NotAFile(path.to_path_buf()))
}

/// Rename `from` to `new_name` in the same folder, refusing to overwrite.
fn rename_to(from: &Path, new_name: &str) -> Result<Renamed> {
    let to = from.with_file_name(new_name);
    if to != from {
        if to.exists() {
            return Err(ComfortError::AlreadyExists {
                from: from.to_path_buf(),
                to,
            });
        }
        fs::rename(from, &to).at_path(from)?;
        debug!("Renamed {} to {}", from.display(), to.display());
    }
    Ok(Renamed {
        from: from.to_path_buf(),
        to,
    })
}

fn rename_matching<F>(target: &FileTarget, matches: F, what: &str, to: &str) -> Result<Vec<Renamed>>
where
    F: Fn(&str) -> bool,
{
    let mut renamed = Vec::new();
    for file in target.files()? {
        let name = file_name(&file)?;
        if matches(&name) {
            renamed.push(rename_to(&file, &name.replace(what, to))?);
        }
    }
    Ok(renamed)
}

/// Rename files whose name contains a substring.
///
/// # Arguments
///
/// * `target` - Files to consider
/// * `has` - Substring a name must contain to be renamed
/// * `what` - Substring to substitute (not always the same as `has`)
/// * `to` - Replacement for `what`
///
/// # Returns
///
/// One [`Renamed`] per file whose name contained `has`. When `what` does not
/// occur in such a name the entry maps the file onto itself and nothing is
/// touched on disk.
pub fn rename_with_substitution(
    target: &FileTarget,
    has: &str,
    what: &str,
    to: &str,
) -> Result<Vec<Renamed>> {
    rename_matching(target, |name| name.contains(has), what, to)
}

/// Rename files whose name does NOT contain `not_has`.
pub fn rename_without_substring(
    target: &FileTarget,
    not_has: &str,
    what: &str,
    to: &str,
) -> Result<Vec<Renamed>> {
    rename_matching(target, |name| !name.contains(not_has), what, to)
}

/// Rename files using an ordered mapping of old to new substrings.
///
/// For each file the pairs are tried in mapping order. Every key found in the
/// current name triggers an immediate rename, so later keys see the already
/// renamed file and one file may be renamed several times.
pub fn rename_with_dictionary(
    target: &FileTarget,
    mapping: &IndexMap<String, String>,
) -> Result<Vec<Renamed>> {
    let mut renamed = Vec::new();
    for file in target.files()? {
        let mut current = file;
        for (old, new) in mapping {
            let name = file_name(&current)?;
            if name.contains(old.as_str()) {
                let step = rename_to(&current, &name.replace(old.as_str(), new))?;
                current = step.to.clone();
                renamed.push(step);
            }
        }
    }
    Ok(renamed)
}
