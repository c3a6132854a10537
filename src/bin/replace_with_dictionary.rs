//! `replace_with_dictionary` - apply a JSON dictionary of substitutions to a file

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use file_comfort::app;
use file_comfort::config::LoggingArgs;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "replace_with_dictionary",
    version,
    about = "Replace text in a file using a JSON dictionary of substitutions",
    long_about = "Loads a flat JSON object of old -> new strings and applies every pair \
                  to the file in the order they appear in the dictionary. Each pair sees \
                  the result of the pairs before it."
)]
struct Args {
    /// File to replace text in
    #[arg(long = "file")]
    file: PathBuf,

    /// JSON dictionary to load substitutions from
    #[arg(long = "dictionary")]
    dictionary: PathBuf,

    /// Optional output, --file is rewritten when no output is provided
    #[arg(long = "output")]
    output: Option<PathBuf>,

    /// Report every substitution that was applied
    #[arg(long = "verbose", action = ArgAction::Set, default_value = "false")]
    verbose: bool,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::init(&args.logging)?;
    app::run_replace_with_dictionary(
        &args.file,
        &args.dictionary,
        args.output.as_deref(),
        args.verbose,
    )
}
