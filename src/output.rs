use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use atime::Timestamp;

use crate::config::{Config, Format};

/// Render the access time as configured, or the "unknown" label for the sentinel.
pub(crate) fn format_timestamp(t: Timestamp, config: &Config) -> String {
    if t.is_unknown() {
        return config.unknown_label.clone();
    }
    match config.format {
        Format::Rfc3339 => t.to_string(),
        Format::Unix => t.to_unix_string(),
    }
}

pub(crate) fn print_line(
    out: &mut impl Write,
    t: Timestamp,
    path: &Path,
    config: &Config,
) -> Result<()> {
    writeln!(out, "{}\t{}", format_timestamp(t, config), path.display())
        .context("could not write to stdout")
}

pub(crate) fn flush() -> Result<()> {
    io::stdout().flush().context("could not flush stdout")
}
