use crate::error::{Error, Result};
use auto_launch::{AutoLaunch, AutoLaunchBuilder};
use std::path::{Path, PathBuf};

/// Run-at-login registration for one executable, keyed by app name.
#[derive(Debug, Clone)]
pub struct Autostart {
    app_name: String,
    exe_path: PathBuf,
    args: Vec<String>,
}

impl Autostart {
    pub fn new(app_name: &str, exe_path: &Path, config_path: Option<&Path>) -> Self {
        let args = match config_path {
            Some(path) => vec!["--config".to_string(), path.display().to_string()],
            None => Vec::new(),
        };
        Self {
            app_name: app_name.to_string(),
            exe_path: exe_path.to_path_buf(),
            args,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn launcher(&self, operation: &'static str) -> Result<AutoLaunch> {
        AutoLaunchBuilder::new()
            .set_app_name(&self.app_name)
            .set_app_path(&self.exe_path.to_string_lossy())
            .set_args(self.args.as_slice())
            .build()
            .map_err(|e| registry_error(operation, e))
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.launcher("query")?
            .is_enabled()
            .map_err(|e| registry_error("query", e))
    }

    pub fn enable(&self) -> Result<()> {
        log::info!("Enabling autostart for {}", self.app_name);
        self.launcher("enable")?
            .enable()
            .map_err(|e| registry_error("enable", e))
    }

    pub fn disable(&self) -> Result<()> {
        log::info!("Disabling autostart for {}", self.app_name);
        self.launcher("disable")?
            .disable()
            .map_err(|e| registry_error("disable", e))
    }
}

fn registry_error(operation: &'static str, e: impl std::fmt::Display) -> Error {
    Error::Registry { operation, reason: e.to_string() }
}
