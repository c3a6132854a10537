//! `replace` - substitute text inside a file
//!
//! Replaces every occurrence of `--what` with `--to` in `--file`, writing the
//! result back or to `--output`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use file_comfort::app;
use file_comfort::config::LoggingArgs;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "replace",
    version,
    about = "Replace a substring everywhere in a file"
)]
struct Args {
    /// File to replace text in
    #[arg(long = "file")]
    file: PathBuf,

    /// Text to substitute
    #[arg(long = "what")]
    what: String,

    /// Replacement text
    #[arg(long = "to")]
    to: String,

    /// Optional output, --file is rewritten when no output is provided
    #[arg(long = "output")]
    output: Option<PathBuf>,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::init(&args.logging)?;
    app::run_replace(&args.file, &args.what, &args.to, args.output.as_deref())
}
