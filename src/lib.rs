//! Read a file's last-access time out of the OS specific stat data attached to its metadata.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use atime::{last_access_time, FileInfo};
//!
//! let info = FileInfo::stat(Path::new("Cargo.toml"))?;
//! println!("{}", last_access_time(&info));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod access;
mod fileinfo;
mod stat;
mod timestamp;

pub use access::{last_access_time, NativeStat};
pub use fileinfo::{FileInfo, Sys};
pub use stat::{AccessTimeProvider, DarwinStat, LinuxStat, Timespec};
pub use timestamp::Timestamp;
