use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "shelltray";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const LOG_FILE_NAME: &str = "app.log";

pub fn exe_path() -> Result<PathBuf> {
    std::env::current_exe().context("Could not determine executable path")
}

pub fn exe_dir() -> Result<PathBuf> {
    exe_path()?
        .parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")
}

pub fn default_config_path() -> Result<PathBuf> {
    exe_dir().map(|p| p.join(CONFIG_FILE_NAME))
}

pub fn log_path() -> Result<PathBuf> {
    exe_dir().map(|p| p.join(LOG_FILE_NAME))
}

/// Resolves a path from the config file: `~` expands to the home directory,
/// relative paths are taken from `base`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
