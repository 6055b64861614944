// src/presentation.rs
use std::io::Write;

use dump_cleanup_usecase::CleanupReport;

use crate::{error::Result, value_enum::OutputFormat};

pub fn print_report(report: &CleanupReport, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, out),
        OutputFormat::Json => print_json(report, out),
    }
}

fn print_text(report: &CleanupReport, out: &mut dyn Write) -> Result<()> {
    for path in &report.deleted {
        writeln!(out, "Heap dump '{}' deleted", path.display())?;
    }
    Ok(())
}

fn print_json(report: &CleanupReport, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
