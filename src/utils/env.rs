//! `.env` loading

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DOTENV: &str = ".env";

/// Variable returned by [`load_openai_key`]
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Load `dir/.env` into the process environment, overriding values that
/// are already set. Returns `None` when `dir` has no `.env`.
pub fn load_environment_from(dir: &Path) -> Result<Option<PathBuf>> {
    let path = dir.join(DOTENV);
    if !path.is_file() {
        return Ok(None);
    }
    dotenvy::from_path_override(&path)
        .with_context(|| format!("Failed to load environment from {}", path.display()))?;
    Ok(Some(path))
}

/// Load the nearest `.env` into the process environment, overriding values
/// that are already set.
///
/// With `usecwd` only the current directory is checked, otherwise its
/// ancestors are searched as well, nearest first.
///
/// # Returns
///
/// The path of the file that was loaded, or `None` when there was none
pub fn load_environment(usecwd: bool) -> Result<Option<PathBuf>> {
    if usecwd {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        return load_environment_from(&cwd);
    }
    match dotenvy::dotenv_override() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).context("Failed to load environment"),
    }
}

/// Load `.env` and read the variable `name`.
pub fn load_environment_key(name: &str, usecwd: bool) -> Result<Option<String>> {
    load_environment(usecwd)?;
    Ok(env::var(name).ok())
}

/// Load `.env` and return the OpenAI API key if one is configured.
pub fn load_openai_key(usecwd: bool) -> Result<Option<String>> {
    load_environment_key(OPENAI_API_KEY, usecwd)
}
