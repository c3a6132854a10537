//! Pretty-printing of a folder's content, recursively

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::listing;
use crate::error::{ComfortError, IoResultExt, Result};

/// Print the tree under `path` to stdout.
///
/// # Arguments
///
/// * `path` - Folder to print
/// * `max_depth` - Depth at which to stop descending, `None` for unlimited
/// * `prefix` - Text put in front of the root line; each level adds a tab
/// * `debug` - Add `FILES:` / `FOLDERS:` labels to separate files from folders
pub fn print_tree(path: &Path, max_depth: Option<usize>, prefix: &str, debug: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, path, max_depth, prefix, debug)
}

/// Same as [`print_tree`] but writes into any `Write`.
pub fn write_tree<W: Write>(
    out: &mut W,
    path: &Path,
    max_depth: Option<usize>,
    prefix: &str,
    debug: bool,
) -> Result<()> {
    write_level(out, path, max_depth, prefix, debug, 0)
}

fn write_level<W: Write>(
    out: &mut W,
    path: &Path,
    max_depth: Option<usize>,
    prefix: &str,
    debug: bool,
    depth: usize,
) -> Result<()> {
    let files = listing::files(path)?.collect::<Result<Vec<PathBuf>>>()?;
    let folders = listing::dirs(path)?.collect::<Result<Vec<PathBuf>>>()?;

    emit(out, path, format_args!("{}{}", prefix, name_of(path)))?;
    if !files.is_empty() {
        if debug {
            emit(out, path, format_args!("{}FILES:", prefix))?;
        }
        for file in &files {
            emit(out, path, format_args!("\t{}{}", prefix, name_of(file)))?;
        }
    }

    if folders.is_empty() {
        return Ok(());
    }
    if debug {
        emit(out, path, format_args!("{}FOLDERS:", prefix))?;
    }
    let nested = format!("\t{}", prefix);
    let at_limit = max_depth == Some(depth);
    for folder in &folders {
        if at_limit || !listing::is_descendable(folder) {
            emit(out, path, format_args!("{}{}", nested, name_of(folder)))?;
        } else {
            write_level(out, folder, max_depth, &nested, debug, depth + 1)?;
        }
    }
    Ok(())
}

fn emit<W: Write>(out: &mut W, path: &Path, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", line).map_err(|source| ComfortError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render the tree into a string, mostly useful for logging.
pub fn render_tree(path: &Path, max_depth: Option<usize>, debug: bool) -> Result<String> {
    let mut buffer = Vec::new();
    write_tree(&mut buffer, path, max_depth, "", debug)?;
    String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        .at_path(path)
}
