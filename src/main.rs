mod args;
mod config;
mod output;
mod path;

use std::io;

use anyhow::Result;
use atime::{last_access_time, FileInfo};

use crate::args::Arguments;
use crate::config::{Config, Format};

fn main() -> Result<()> {
    let args = Arguments::get_args()?;
    let mut config = Config::load()?;
    if args.unix_format {
        config.format = Format::Unix;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &args.paths {
        let info = FileInfo::stat(path)?;
        output::print_line(&mut out, last_access_time(&info), path, &config)?;
    }
    drop(out);

    output::flush()
}
