// src/args.rs
use clap::{Parser, ValueHint};

use crate::value_enum::OutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// Both retention settings fall back to the environment so the tool can be
/// dropped into a scheduler without wrapper scripts.
#[derive(Parser, Debug)]
#[command(
    name = "dump_cleanup",
    version = crate::VERSION,
    about = "Keeps the newest heap dumps (*.hprof) in a folder and deletes the rest"
)]
pub struct Args {
    /// Folder holding the heap dumps
    #[arg(long, env = "JMA_HEAP_DUMP_FOLDER", value_hint = ValueHint::DirPath)]
    pub folder: Option<String>,

    /// Maximum number of heap dumps; 0 disables cleanup
    #[arg(long, env = "JMA_MAX_DUMP_COUNT", default_value_t = 0, allow_negative_numbers = true)]
    pub max_count: i64,

    /// Output format for the list of deleted files
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
