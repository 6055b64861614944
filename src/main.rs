// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, process::ExitCode};

use clap::Parser;
use dump_cleanup::args::Args;
use dump_cleanup_infra::OsFileSystem;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match dump_cleanup::run(&args, &OsFileSystem::new(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
