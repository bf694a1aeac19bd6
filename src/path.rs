use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use path_absolutize::Absolutize;

pub(crate) trait Absolute {
    /// Turn a relative into an absolute path, resolving `.` and `..` without touching the
    /// filesystem, so symlinks are left alone.
    fn make_absolute(&self) -> Result<PathBuf>;
}

impl Absolute for Path {
    fn make_absolute(&self) -> Result<PathBuf> {
        Ok(self
            .absolutize()
            .with_context(|| format!("could not resolve absolute path of {self:?}"))?
            .to_path_buf())
    }
}

#[cfg(test)]
mod test {
    use super::Absolute;
    use std::path::{Path, PathBuf};

    #[test]
    fn normalizes_dots() {
        assert_eq!(
            Path::new("/a/./b/../c").make_absolute().unwrap(),
            PathBuf::from("/a/c")
        );
    }

    #[test]
    fn relative_is_joined_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(Path::new("x").make_absolute().unwrap(), cwd.join("x"));
    }
}
