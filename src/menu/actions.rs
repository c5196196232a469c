use super::resolve::{resolve, ResolvedCommand};
use super::router::Flow;
use crate::config::Config;
use crate::desktop::Desktop;
use crate::launch;
use anyhow::{Context, Result};

pub const LAUNCH_FAILED_TITLE: &str = "Failed to start";
pub const AUTOSTART_FAILED_TITLE: &str = "Failed to change start at login";
pub const RELOAD_FAILED_TITLE: &str = "Failed to reload";

/// Click handler for a configured leaf. Always returns `Continue`: a failed
/// start is logged and alerted, never fatal.
pub fn launch_node(command: &[String], config: &Config, desktop: &dyn Desktop) -> Flow {
    let Some(resolved) = resolve(command, config.aliases(), config.working_dir) else {
        log::debug!("Menu entry has no command");
        return Flow::Continue;
    };

    match launch::spawn_detached(&resolved) {
        Ok(pid) => log::info!("Started `{}` (pid {})", resolved.display(), pid),
        Err(e) => {
            log::error!("{}", e);
            desktop.show_alert(LAUNCH_FAILED_TITLE, &e.to_string());
        }
    }
    Flow::Continue
}

/// Flips the run-at-login registration and returns the state read back
/// afterwards.
pub fn toggle_autostart(desktop: &dyn Desktop) -> bool {
    let was_enabled = desktop.is_autostart_enabled();
    let result = if was_enabled {
        desktop.disable_autostart()
    } else {
        desktop.enable_autostart()
    };

    if let Err(e) = result {
        log::error!("{}", e);
        desktop.show_alert(AUTOSTART_FAILED_TITLE, &e.to_string());
    }

    let enabled = desktop.is_autostart_enabled();
    log::info!("Start at login: {}", enabled);
    enabled
}

/// Starts a fresh copy of the tray and quits this one. If the new copy
/// cannot start, this one keeps running.
pub fn reload(restart: &ResolvedCommand, desktop: &dyn Desktop) -> Flow {
    match launch::spawn_detached(restart) {
        Ok(pid) => {
            log::info!("Reloading (new instance pid {})", pid);
            Flow::Quit
        }
        Err(e) => {
            log::error!("{}", e);
            desktop.show_alert(RELOAD_FAILED_TITLE, &e.to_string());
            Flow::Continue
        }
    }
}

/// The command line that restarts the current process with its arguments.
pub fn restart_command() -> Result<ResolvedCommand> {
    let exe = crate::paths::exe_path()?;
    let program = exe
        .to_str()
        .context("Executable path is not valid UTF-8")?
        .to_string();

    Ok(ResolvedCommand {
        program,
        args: std::env::args().skip(1).collect(),
        dir: None,
    })
}
