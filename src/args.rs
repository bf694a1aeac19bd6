use std::env::args_os;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Result};
use itertools::Itertools;

use crate::path::Absolute;

pub(crate) struct Arguments {
    /// `-u` was given: print seconds since the epoch, whatever the config says.
    pub(crate) unix_format: bool,
    /// Absolute paths to look at, without duplicates, in the order given.
    pub(crate) paths: Vec<PathBuf>,
}

impl Arguments {
    pub(crate) fn get_args() -> Result<Self> {
        Self::parse(args_os().skip(1))
    }

    fn parse(raw_args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut raw_args = raw_args.into_iter().peekable();
        let unix_format = raw_args.next_if(|a| a == "-u").is_some();

        let paths: Vec<PathBuf> = raw_args
            .map(PathBuf::from)
            .map(|p| p.make_absolute())
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .unique()
            .collect();

        if paths.is_empty() {
            bail!("Missing arguments\nusage: atime [-u] <path>...");
        }
        Ok(Self { unix_format, paths })
    }
}

#[cfg(test)]
mod test {
    use super::Arguments;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn flag_and_duplicates() {
        let args = Arguments::parse(os(&["-u", "/a/b", "/c", "/a/./b"])).unwrap();
        assert!(args.unix_format);
        assert_eq!(args.paths, vec![PathBuf::from("/a/b"), PathBuf::from("/c")]);
    }

    #[test]
    fn no_flag() {
        let args = Arguments::parse(os(&["/x"])).unwrap();
        assert!(!args.unix_format);
        assert_eq!(args.paths, vec![PathBuf::from("/x")]);
    }

    #[test]
    fn missing_paths() {
        assert!(Arguments::parse(os(&[])).is_err());
        assert!(Arguments::parse(os(&["-u"])).is_err());
    }
}
