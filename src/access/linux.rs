use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use crate::fileinfo::Sys;
use crate::stat::{LinuxStat, Timespec};

pub type NativeStat = LinuxStat;

pub(crate) fn native_stat(m: &Metadata) -> Option<Sys> {
    Some(Box::new(LinuxStat {
        ino: m.ino(),
        mode: m.mode(),
        size: m.size(),
        atim: Timespec::new(m.atime(), m.atime_nsec()),
        mtim: Timespec::new(m.mtime(), m.mtime_nsec()),
        ctim: Timespec::new(m.ctime(), m.ctime_nsec()),
    }))
}
