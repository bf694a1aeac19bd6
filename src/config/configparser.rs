use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// `key = value` pairs read from the config file. Everything after a `#` is a comment.
#[derive(Debug)]
pub(super) struct ConfigParser {
    key_value_pairs: HashMap<String, String>,
}

impl ConfigParser {
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.key_value_pairs.get(key).map(String::as_str)
    }

    pub fn get_value_into(&self, key: &str, field: &mut String) {
        if let Some(value) = self.get_value(key) {
            *field = value.to_owned();
        }
    }
}

impl FromStr for ConfigParser {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        let mut key_value_pairs = HashMap::new();

        for line in content.lines() {
            let before_comment = line.split('#').next().unwrap_or_default().trim();
            if before_comment.is_empty() {
                continue;
            }

            if before_comment.contains('=') {
                extract_key_value_pair(before_comment, &mut key_value_pairs)?;
            }
        }

        Ok(Self { key_value_pairs })
    }
}

impl TryFrom<PathBuf> for ConfigParser {
    type Error = anyhow::Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        fs::read_to_string(&path)
            .with_context(|| format!("reading config file {path:?}"))?
            .parse()
    }
}

/// From a line in the config, extract the items like `<key>=<value>`.
fn extract_key_value_pair(line: &str, pairs: &mut HashMap<String, String>) -> Result<()> {
    let (key, value) = line
        .split_once('=')
        .with_context(|| format!("separating key and value in '{line}'"))?;
    let key = key.trim();
    let value = value.trim();
    if pairs.insert(key.to_owned(), value.to_owned()).is_some() {
        bail!("duplicate key in config: {key}")
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::ConfigParser;

    #[test]
    fn comments_and_blank_lines() {
        let parser: ConfigParser = "# header\n\n  a = 1 # trailing\nnot a pair\nb=two words\n"
            .parse()
            .unwrap();
        assert_eq!(parser.get_value("a"), Some("1"));
        assert_eq!(parser.get_value("b"), Some("two words"));
        assert_eq!(parser.get_value("not a pair"), None);
    }

    #[test]
    fn duplicate_key() {
        assert!("a = 1\na = 2".parse::<ConfigParser>().is_err());
    }

    #[test]
    fn get_value_into_keeps_field_when_missing() {
        let parser: ConfigParser = "a = 1".parse().unwrap();
        let mut field = String::from("default");
        parser.get_value_into("b", &mut field);
        assert_eq!(field, "default");
        parser.get_value_into("a", &mut field);
        assert_eq!(field, "1");
    }
}
