// src/app.rs
use std::io::Write;

use dump_cleanup_domain::CleanupConfig;
use dump_cleanup_ports::filesystem::FileSystem;
use dump_cleanup_usecase::RetentionEnforcer;
use log::debug;

use crate::{args::Args, error::Result, presentation};

/// Runs one cleanup pass against `fs` and writes the outcome to `out`.
pub fn run(args: &Args, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let config = CleanupConfig::from(args);
    debug!("cleanup config: {config:?}");
    let report = RetentionEnforcer::new(fs).run(&config)?;
    presentation::print_report(&report, args.format, out)
}
