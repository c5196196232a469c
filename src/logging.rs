use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogOpen { path: path.to_path_buf(), source })
}

/// Sends all `log` output to the append-only file at `path`. `RUST_LOG`
/// overrides the default `info` filter.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .init();

    Ok(())
}
