mod configparser;
mod misc;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use smart_default::SmartDefault;

use self::configparser::ConfigParser;
use self::misc::get_config_file;

/// How timestamps are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    #[default]
    Rfc3339,
    Unix,
}

impl TryFrom<&str> for Format {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "rfc3339" => Ok(Self::Rfc3339),
            "unix" => Ok(Self::Unix),
            _ => bail!("unknown Format '{value}', expected 'rfc3339' or 'unix'"),
        }
    }
}

#[derive(Debug, SmartDefault)]
pub(crate) struct Config {
    /// Printed instead of a timestamp when the access time could not be read.
    #[default = "unknown"]
    pub(crate) unknown_label: String,
    pub(crate) format: Format,
}

impl Config {
    /// Load the config file from disk. No config location, or a missing file, means defaults.
    pub(crate) fn load() -> Result<Self> {
        Self::load_from(get_config_file())
    }

    fn load_from(config_file: Option<PathBuf>) -> Result<Self> {
        let config_file = match config_file {
            Some(path) if path.exists() => path,
            _ => return Ok(Self::default()),
        };
        let parser: ConfigParser = config_file
            .clone()
            .try_into()
            .with_context(|| format!("loading config from {config_file:?}"))?;
        Self::from_parser(&parser)
    }

    fn from_parser(parser: &ConfigParser) -> Result<Self> {
        let mut result = Self::default();

        parser.get_value_into("UnknownLabel", &mut result.unknown_label);
        if let Some(format) = parser.get_value("Format") {
            result.format = format.try_into()?;
        }

        result.sanity_checked()
    }

    /// Takes ownership of the instance and returns itself, but sanity-checked and wrapped in
    /// `anyhow::Result<_>`.
    fn sanity_checked(self) -> Result<Self> {
        if self.unknown_label.is_empty() {
            bail!("missing value for UnknownLabel");
        }
        Ok(self)
    }
}

#[cfg(test)]
mod test {
    use super::configparser::ConfigParser;
    use super::{Config, Format};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.unknown_label, "unknown");
        assert_eq!(config.format, Format::Rfc3339);
    }

    #[test]
    fn no_config_location() {
        let config = Config::load_from(None).unwrap();
        assert_eq!(config.unknown_label, "unknown");
        assert_eq!(config.format, Format::Rfc3339);
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("atime-config-does-not-exist.conf");
        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.unknown_label, "unknown");
    }

    #[test]
    fn file_on_disk() {
        let path = std::env::temp_dir().join(format!("atime-config-{}.conf", std::process::id()));
        std::fs::write(&path, "UnknownLabel = ?\n").unwrap();
        let config = Config::load_from(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().unknown_label, "?");
    }

    #[test]
    fn values_from_file() {
        let parser: ConfigParser = "UnknownLabel = -\nFormat = Unix # seconds\n".parse().unwrap();
        let config = Config::from_parser(&parser).unwrap();
        assert_eq!(config.unknown_label, "-");
        assert_eq!(config.format, Format::Unix);
    }

    #[test]
    fn bad_format() {
        let parser: ConfigParser = "Format = iso".parse().unwrap();
        assert!(Config::from_parser(&parser).is_err());
    }
}
