//! XDG Base Directory paths for dosh.
//!
//! | Purpose | XDG Variable | dosh default |
//! |---------|--------------|--------------|
//! | System root, history | `$XDG_DATA_HOME` | `~/.local/share/dosh` |
//! | `config.toml` | `$XDG_CONFIG_HOME` | `~/.config/dosh` |
//!
//! The system root holds `devices/`, the tree drives are mounted from.

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the user's home directory.
///
/// Returns `$HOME` or falls back to `/tmp` if not set.
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

/// Returns `$XDG_DATA_HOME` or falls back to `~/.local/share`.
pub fn xdg_data_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".local").join("share"))
}

/// Returns `$XDG_CONFIG_HOME` or falls back to `~/.config`.
pub fn xdg_config_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".config"))
}

/// Get the dosh data directory, the default system root.
pub fn data_dir() -> PathBuf {
    xdg_data_home().join("dosh")
}

/// Get the dosh config directory.
pub fn config_dir() -> PathBuf {
    xdg_config_home().join("dosh")
}

/// REPL line history.
pub fn history_path() -> PathBuf {
    data_dir().join("history.txt")
}
