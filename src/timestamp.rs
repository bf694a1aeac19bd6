use std::fmt::Display;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, SecondsFormat, Utc};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A point in time as whole seconds and nanoseconds since the Unix epoch.
///
/// The default value is the epoch itself, which doubles as the "unknown" sentinel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Timestamp {
    /// Build a timestamp from a raw `(sec, nsec)` pair as found in a stat block. A nanosecond
    /// value outside `0..1_000_000_000` is carried into the seconds. If that carry overflows the
    /// result is the sentinel.
    pub fn new(sec: i64, nsec: i64) -> Self {
        let carried = sec.checked_add(nsec.div_euclid(NANOS_PER_SEC));
        match carried {
            Some(secs) => Self {
                secs,
                // rem_euclid keeps this in 0..NANOS_PER_SEC
                nanos: nsec.rem_euclid(NANOS_PER_SEC) as u32,
            },
            None => Self::default(),
        }
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Whether this is the epoch sentinel handed out when no access time could be read.
    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }

    /// `None` if the value is outside of what `SystemTime` can represent on this platform.
    pub fn to_system_time(self) -> Option<SystemTime> {
        if self.secs >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.secs as u64, self.nanos))
        } else {
            // nanos always count forward, so step back the whole seconds first
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.secs.unsigned_abs()))?
                .checked_add(Duration::from_nanos(self.nanos.into()))
        }
    }

    /// `None` if the value is outside of what chrono can represent.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.secs, self.nanos)
    }

    /// Render as `<secs>.<nanos>` with nine fractional digits.
    pub fn to_unix_string(self) -> String {
        format!("{}.{:09}", self.secs, self.nanos)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => f.write_str(&self.to_unix_string()),
        }
    }
}
