// src/config.rs
use dump_cleanup_domain::CleanupConfig;

use crate::args::Args;

// An unset folder becomes an empty string; the enforcer rejects it.
impl From<&Args> for CleanupConfig {
    fn from(args: &Args) -> Self {
        CleanupConfig::new(args.folder.clone().unwrap_or_default(), args.max_count)
    }
}
