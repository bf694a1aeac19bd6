//! Last-access time extraction.
//!
//! Exactly one of the submodules is compiled in, picked by `target_os`. Each knows which native
//! stat layout its platform produces and how to find the access time in it.

#[cfg(target_os = "macos")]
mod darwin;
#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod unsupported;

#[cfg(target_os = "macos")]
use darwin as platform;
#[cfg(target_os = "linux")]
use linux as platform;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
use unsupported as platform;

pub use platform::NativeStat;
pub(crate) use platform::native_stat;

use crate::fileinfo::FileInfo;
use crate::stat::AccessTimeProvider;
use crate::timestamp::Timestamp;

/// Read the last-access time out of the native stat data in `info`.
///
/// Returns the epoch sentinel if `info` carries no native data, or data in a layout other than
/// the one this platform produces.
pub fn last_access_time(info: &FileInfo) -> Timestamp {
    info.sys()
        .and_then(|sys| sys.downcast_ref::<NativeStat>())
        .map(|stat| stat.access_time())
        .unwrap_or_default()
}
