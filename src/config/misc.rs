use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "atime.conf";

/// Get the path of the config file. This is `$XDG_CONFIG_HOME/atime.conf`, or
/// `$HOME/.config/atime.conf` if `$XDG_CONFIG_HOME` is unset or empty. `None` if neither is
/// declared.
pub(super) fn get_config_file() -> Option<PathBuf> {
    config_file_from(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}

fn config_file_from(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let mut dir: PathBuf = match xdg_config_home.filter(|s| !s.is_empty()) {
        Some(xdg) => xdg.into(),
        None => {
            let mut home: PathBuf = home.filter(|s| !s.is_empty())?.into();
            home.push(".config");
            home
        }
    };
    dir.push(CONFIG_FILE_NAME);
    Some(dir)
}
