//! Locates `config.toml`, which holds the OMDb key, the default book
//! result limit and the weather language.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name looked up inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Directory created under the XDG config home.
const APP_DIR: &str = "mediahub";

/// Resolves the config file path.
///
/// `--dir` wins when given, relative paths included. Otherwise the file
/// lives in `$XDG_CONFIG_HOME/mediahub/`, falling back to
/// `$HOME/.config/mediahub/`. The file does not have to exist.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
/// (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.join(CONFIG_FILE)),
        None => default_config_path(
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        ),
    }
}

/// Default location computed from the two environment values.
fn default_config_path(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    // An empty XDG_CONFIG_HOME counts as unset.
    let base = match (xdg_config_home.filter(|v| !v.is_empty()), home) {
        (Some(xdg), _) => PathBuf::from(xdg),
        (None, Some(home)) => PathBuf::from(home).join(".config"),
        (None, None) => bail!("HOME environment variable is not set"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}
