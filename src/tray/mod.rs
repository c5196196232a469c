pub mod icon;
mod platform;

use crate::menu::builder::MenuContext;
use anyhow::Result;
use tray_icon::Icon;

pub const DEFAULT_TOOLTIP: &str = "Shell Tray";

pub struct TraySettings {
    pub tooltip: String,
    pub icon: Icon,
}

/// Shows the tray and runs the UI event loop on the calling thread until
/// Quit or Reload ends it.
pub fn run(ctx: MenuContext, settings: TraySettings) -> Result<()> {
    platform::run(ctx, settings)
}
