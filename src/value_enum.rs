// src/value_enum.rs
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Heap dump '<path>' deleted` line per file
    #[default]
    Text,
    /// A single JSON report
    Json,
}
