//! Native stat layouts of the supported OS families.
//!
//! Both families store the same timestamps, they only disagree on field names. Linux calls the
//! access time `atim`, Darwin calls it `atimespec`.

use crate::timestamp::Timestamp;

/// A `(seconds, nanoseconds)` pair relative to the Unix epoch, as in `struct timespec`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timespec {
    pub sec: i64,
    pub nsec: i64,
}

impl Timespec {
    pub fn new(sec: i64, nsec: i64) -> Self {
        Self { sec, nsec }
    }
}

impl From<Timespec> for Timestamp {
    fn from(ts: Timespec) -> Self {
        Timestamp::new(ts.sec, ts.nsec)
    }
}

/// The parts of `struct stat` on Linux that we care about.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinuxStat {
    pub ino: u64,
    pub mode: u32,
    pub size: u64,
    pub atim: Timespec,
    pub mtim: Timespec,
    pub ctim: Timespec,
}

/// The parts of `struct stat` on macOS that we care about.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DarwinStat {
    pub ino: u64,
    pub mode: u32,
    pub size: u64,
    pub atimespec: Timespec,
    pub mtimespec: Timespec,
    pub ctimespec: Timespec,
}

/// Anything that knows where its last-access time lives.
pub trait AccessTimeProvider {
    fn access_time(&self) -> Timestamp;
}

impl AccessTimeProvider for LinuxStat {
    fn access_time(&self) -> Timestamp {
        self.atim.into()
    }
}

impl AccessTimeProvider for DarwinStat {
    fn access_time(&self) -> Timestamp {
        self.atimespec.into()
    }
}

#[cfg(test)]
mod test {
    use super::{AccessTimeProvider, DarwinStat, LinuxStat, Timespec};
    use crate::timestamp::Timestamp;

    #[test]
    fn field_names_do_not_matter() {
        for (sec, nsec) in [(0, 0), (1, 1), (1_700_000_000, 500_000_000), (-5, 999_999_999)] {
            let linux = LinuxStat {
                atim: Timespec::new(sec, nsec),
                ..Default::default()
            };
            let darwin = DarwinStat {
                atimespec: Timespec::new(sec, nsec),
                ..Default::default()
            };
            assert_eq!(linux.access_time(), darwin.access_time());
            assert_eq!(linux.access_time(), Timestamp::new(sec, nsec));
        }
    }

    #[test]
    fn other_times_are_ignored() {
        let stat = LinuxStat {
            atim: Timespec::new(100, 7),
            mtim: Timespec::new(200, 8),
            ctim: Timespec::new(300, 9),
            ..Default::default()
        };
        assert_eq!(stat.access_time(), Timestamp::new(100, 7));
    }
}
