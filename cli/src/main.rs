#![allow(missing_docs)]

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use log::{debug, error};
use name_lists::{DEFAULT_OUTPUT, LEFT, RIGHT, WordPair};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type ExportVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type ExportVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Where to write the JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Replace the built-in adjectives with a newline-delimited file
    #[arg(long, value_name = "FILE")]
    left: Option<PathBuf>,

    /// Replace the built-in surnames with a newline-delimited file
    #[arg(long, value_name = "FILE")]
    right: Option<PathBuf>,

    #[command(flatten)]
    verbosity: ExportVerbosity,
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.log_level_filter())
        .parse_env(Env::new().filter("NAME_LISTS_LOG"))
        .init();

    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let left = match &args.left {
        Some(path) => name_lists::load_words(path)
            .context("failed to load left word list")?,
        None => LEFT.to_vec(),
    };
    let right = match &args.right {
        Some(path) => name_lists::load_words(path)
            .context("failed to load right word list")?,
        None => RIGHT.to_vec(),
    };
    debug!("exporting {} left and {} right words", left.len(), right.len());

    let pair = WordPair::new(left, right);
    // ExportError already names the path
    name_lists::export_to(&pair, &args.output)
        .context("failed to export word lists")?;
    Ok(())
}
