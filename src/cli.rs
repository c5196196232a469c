use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shelltray", version, about = "Tray menu that launches shell commands")]
pub struct Cli {
    /// Config file (defaults to config.yaml beside the executable)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
