//! In-file literal text replacement
//!
//! The whole file is read into memory, substituted and written back in one
//! go, either over the source or to a separate output path.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, info};

use crate::error::{ComfortError, IoResultExt, Result};

fn read_text(file: &Path) -> Result<String> {
    let metadata = fs::metadata(file).at_path(file)?;
    if !metadata.is_file() {
        return Err(ComfortError::NotAFile(file.to_path_buf()));
    }
    fs::read_to_string(file).at_path(file)
}

fn write_text(file: &Path, output: Option<&Path>, text: &str) -> Result<PathBuf> {
    let destination = output.unwrap_or(file);
    fs::write(destination, text).at_path(destination)?;
    debug!("Wrote {} bytes to {}", text.len(), destination.display());
    Ok(destination.to_path_buf())
}

/// Replace every occurrence of `what` with `to` inside a file.
///
/// # Arguments
///
/// * `file` - File to read
/// * `what` - Literal text to search for
/// * `to` - Replacement text
/// * `output` - Where to write the result; `file` is overwritten when `None`
///
/// # Returns
///
/// The path that was written
pub fn replace_in_file(
    file: &Path,
    what: &str,
    to: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let text = read_text(file)?;
    write_text(file, output, &text.replace(what, to))
}

/// What [`apply_mapping`] did to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The path that was written
    pub written: PathBuf,
    /// Pairs whose key was present when their turn came, in application order
    pub applied: Vec<(String, String)>,
}

/// Apply an ordered mapping of substitutions to a file.
///
/// Pairs are applied one after another to the in-memory text, so each pair
/// sees the result of the previous ones: `"AB"` with `{"A": "B", "B": "C"}`
/// becomes `"CC"`. The file is written once at the end.
pub fn apply_mapping(
    file: &Path,
    mapping: &IndexMap<String, String>,
    output: Option<&Path>,
) -> Result<Replacement> {
    let mut text = read_text(file)?;
    let mut applied = Vec::new();
    for (old, new) in mapping {
        if text.contains(old.as_str()) {
            text = text.replace(old.as_str(), new);
            applied.push((old.clone(), new.clone()));
        }
    }
    let written = write_text(file, output, &text)?;
    Ok(Replacement { written, applied })
}

/// [`apply_mapping`], logging every applied pair when `verbose` is set.
///
/// # Returns
///
/// The path that was written
pub fn replace_from_mapping(
    file: &Path,
    mapping: &IndexMap<String, String>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<PathBuf> {
    let replacement = apply_mapping(file, mapping, output)?;
    if verbose {
        for (old, new) in &replacement.applied {
            info!("Replaced {} with {} in {}", old, new, file.display());
        }
    }
    Ok(replacement.written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replace_in_place() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("greeting.txt");
        fs::write(&file, "hello world, hello moon").unwrap();

        let written = replace_in_file(&file, "hello", "bye", None).unwrap();
        assert_eq!(written, file);
        assert_eq!(fs::read_to_string(&file).unwrap(), "bye world, bye moon");
    }

    #[test]
    fn test_replace_to_output_leaves_source() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("source.txt");
        let output = dir.path().join("out.txt");
        fs::write(&file, "a.b.c").unwrap();

        let written = replace_in_file(&file, ".", "*", Some(output.as_path())).unwrap();
        assert_eq!(written, output);
        assert_eq!(fs::read_to_string(&file).unwrap(), "a.b.c");
        assert_eq!(fs::read_to_string(&output).unwrap(), "a*b*c");
    }

    #[test]
    fn test_replace_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("config.ini");
        let original = "name = alpha\nmode = fast\n";
        fs::write(&file, original).unwrap();

        replace_in_file(&file, "alpha", "omega", None).unwrap();
        replace_in_file(&file, "omega", "alpha", None).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), original);
    }

    #[test]
    fn test_mapping_is_applied_sequentially() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("ab.txt");
        fs::write(&file, "AB").unwrap();

        replace_from_mapping(&file, &mapping(&[("A", "B"), ("B", "C")]), None, true).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "CC");
    }

    #[test]
    fn test_mapping_order_matters() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("ab.txt");
        let output = dir.path().join("ba.txt");
        fs::write(&file, "AB").unwrap();

        let reversed = mapping(&[("B", "C"), ("A", "B")]);
        replace_from_mapping(&file, &reversed, Some(output.as_path()), false).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "BC");
        assert_eq!(fs::read_to_string(&file).unwrap(), "AB");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = replace_in_file(&dir.path().join("missing.txt"), "a", "b", None).unwrap_err();
        assert!(matches!(err, ComfortError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = replace_from_mapping(dir.path(), &IndexMap::new(), None, false).unwrap_err();
        assert!(matches!(err, ComfortError::NotAFile(_)));
    }

    #[test]
    fn test_only_found_pairs_are_reported() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("ab.txt");
        fs::write(&file, "AB").unwrap();

        let chain = mapping(&[("A", "B"), ("X", "Y"), ("B", "C"), ("A", "Z")]);
        let replacement = apply_mapping(&file, &chain, None).unwrap();

        assert_eq!(replacement.written, file);
        assert_eq!(
            replacement.applied,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string()),
            ]
        );
        assert_eq!(fs::read_to_string(&file).unwrap(), "CC");
    }
}
