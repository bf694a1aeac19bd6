use std::any::Any;
use std::ffi::{OsStr, OsString};
use std::fmt::Debug;
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::access;

/// The raw, OS specific stat data carried along with a [`FileInfo`].
pub type Sys = Box<dyn Any + Send + Sync>;

/// Platform neutral description of a file, with the native stat data tucked away in `sys`.
pub struct FileInfo {
    name: OsString,
    size: u64,
    mode: u32,
    modified: Option<SystemTime>,
    sys: Option<Sys>,
}

impl FileInfo {
    /// Build a `FileInfo` by hand, without any native stat data attached.
    pub fn new(
        name: impl Into<OsString>,
        size: u64,
        mode: u32,
        modified: Option<SystemTime>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mode,
            modified,
            sys: None,
        }
    }

    /// Attach native stat data, replacing whatever was there before.
    pub fn with_sys<T: Any + Send + Sync>(mut self, sys: T) -> Self {
        self.sys = Some(Box::new(sys));
        self
    }

    /// Describe `metadata`, which was obtained for a file called `name`.
    pub fn from_metadata(name: impl Into<OsString>, metadata: &Metadata) -> Self {
        Self {
            name: name.into(),
            size: metadata.len(),
            mode: mode_of(metadata),
            modified: metadata.modified().ok(),
            sys: access::native_stat(metadata),
        }
    }

    /// Query the filesystem for `path`. Symlinks are not followed.
    pub fn stat(path: &Path) -> Result<Self> {
        let metadata =
            fs::symlink_metadata(path).with_context(|| format!("could not stat {path:?}"))?;
        let name = path.file_name().unwrap_or(path.as_os_str());
        Ok(Self::from_metadata(name, &metadata))
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mode(&self) -> u32 {
        self.mode
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn sys(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.sys.as_deref()
    }
}

impl Debug for FileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileInfo")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("mode", &self.mode)
            .field("modified", &self.modified)
            .field("sys", &self.sys.is_some())
            .finish()
    }
}

#[cfg(unix)]
fn mode_of(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn mode_of(_metadata: &Metadata) -> u32 {
    0
}
