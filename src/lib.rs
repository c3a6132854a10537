//! File Comfort - helper functions to make working with files more comfortable
//!
//! This library provides directory listing and traversal, bulk renaming of
//! files by substring and literal text replacement inside files. The
//! `replace` and `replace_with_dictionary` binaries are thin wrappers around
//! [`app`].

pub mod core;
pub mod error;
pub mod utils;

// Re-export the common entry points for convenience
pub use crate::core::listing::{by_ext, children, dirs, files, with_ext};
pub use crate::core::rename::{
    rename_with_dictionary, rename_with_substitution, rename_without_substring, FileTarget, Renamed,
};
pub use crate::core::replace::{apply_mapping, replace_from_mapping, replace_in_file, Replacement};
pub use crate::core::traverse::{traverse, Node, Traversal, Traverse};
pub use crate::core::tree::print_tree;
pub use crate::error::{ComfortError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runtime settings shared by the binaries
pub mod config {
    use std::env;
    use std::path::PathBuf;

    use anyhow::{Context, Result};

    use crate::utils::logging::{configure_logger, LogLevel};

    /// Environment variable holding the default log level
    pub const LOG_LEVEL_VAR: &str = "FILE_COMFORT_LOG_LEVEL";
    /// Environment variable holding the default log file
    pub const LOG_FILE_VAR: &str = "FILE_COMFORT_LOG_FILE";

    /// Logging flags accepted by every command
    #[derive(clap::Args, Debug, Clone, Default)]
    pub struct LoggingArgs {
        /// Set logging level (none, debug, info, warning, error, critical)
        #[arg(long = "log-level")]
        pub log_level: Option<LogLevel>,

        /// Write the log to this file instead of stderr
        #[arg(long = "log-file")]
        pub log_file: Option<PathBuf>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Settings {
        pub log_level: LogLevel,
        pub log_file: Option<PathBuf>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                log_level: LogLevel::Info,
                log_file: None,
            }
        }
    }

    impl Settings {
        /// Read settings from the environment, falling back to defaults.
        pub fn from_env() -> Result<Self> {
            let mut settings = Self::default();
            if let Ok(level) = env::var(LOG_LEVEL_VAR) {
                settings.log_level = level
                    .parse()
                    .with_context(|| format!("Invalid {}", LOG_LEVEL_VAR))?;
            }
            if let Some(file) = env::var_os(LOG_FILE_VAR).filter(|f| !f.is_empty()) {
                settings.log_file = Some(PathBuf::from(file));
            }
            Ok(settings)
        }

        /// Command line flags win over the environment.
        pub fn with_args(mut self, args: &LoggingArgs) -> Self {
            if let Some(level) = args.log_level {
                self.log_level = level;
            }
            if let Some(file) = &args.log_file {
                self.log_file = Some(file.clone());
            }
            self
        }

        pub fn init_logging(&self) -> Result<()> {
            configure_logger(self.log_level, self.log_file.as_deref())
        }
    }
}

/// Command-line application functionality
pub mod app {
    use std::path::Path;

    use anyhow::{Context, Result};
    use colored::Colorize;
    use log::{info, warn};

    use crate::config::{LoggingArgs, Settings};
    use crate::core::replace::{replace_from_mapping, replace_in_file};
    use crate::utils::dictionary::load_dictionary;
    use crate::utils::env::load_environment;

    /// Load `.env`, resolve settings and start logging.
    ///
    /// Where the environment came from is logged once the logger is up.
    pub fn init(args: &LoggingArgs) -> Result<Settings> {
        // .env may define the logging variables, so it goes first
        let env_file = load_environment(false)?;
        let settings = Settings::from_env()?.with_args(args);
        settings.init_logging()?;
        match env_file {
            Some(path) => info!("Environment found at {}", path.display()),
            None => warn!("Did not find an environment file, using system environment only"),
        }
        Ok(settings)
    }

    /// Body of the `replace` command
    pub fn run_replace(file: &Path, what: &str, to: &str, output: Option<&Path>) -> Result<()> {
        println!("{} {} to {} in {}", "replacing".bold(), what, to, file.display());
        let written = replace_in_file(file, what, to, output)
            .with_context(|| format!("Failed to replace text in {}", file.display()))?;
        info!("Wrote {}", written.display());
        Ok(())
    }

    /// Body of the `replace_with_dictionary` command
    pub fn run_replace_with_dictionary(
        file: &Path,
        dictionary: &Path,
        output: Option<&Path>,
        verbose: bool,
    ) -> Result<()> {
        println!(
            "{} {} in {}",
            "replacing from".bold(),
            dictionary.display(),
            file.display()
        );
        let mapping = load_dictionary(dictionary)
            .with_context(|| format!("Failed to load dictionary {}", dictionary.display()))?;

        println!("substitutions dictionary is:");
        for (old, new) in &mapping {
            println!("{} {} {} {}", "REPLACE".green(), old, "WITH".green(), new);
        }

        let written = replace_from_mapping(file, &mapping, output, verbose)
            .with_context(|| format!("Failed to apply dictionary to {}", file.display()))?;
        info!("Wrote {}", written.display());
        Ok(())
    }
}
