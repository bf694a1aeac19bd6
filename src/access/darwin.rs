use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use crate::fileinfo::Sys;
use crate::stat::{DarwinStat, Timespec};

pub type NativeStat = DarwinStat;

pub(crate) fn native_stat(m: &Metadata) -> Option<Sys> {
    Some(Box::new(DarwinStat {
        ino: m.ino(),
        mode: m.mode(),
        size: m.size(),
        atimespec: Timespec::new(m.atime(), m.atime_nsec()),
        mtimespec: Timespec::new(m.mtime(), m.mtime_nsec()),
        ctimespec: Timespec::new(m.ctime(), m.ctime_nsec()),
    }))
}
