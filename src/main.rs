use anyhow::{Context, Result};
use clap::Parser;
use shelltray::cli::Cli;
use shelltray::config::Config;
use shelltray::desktop::{Autostart, Desktop, NativeDesktop};
use shelltray::menu::actions;
use shelltray::menu::builder::MenuContext;
use shelltray::tray::{self, TraySettings};
use shelltray::{logging, paths};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const CONFIG_FAILED_TITLE: &str = "Failed to load config";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = paths::log_path()?;
    logging::init(&log_path).context("Cannot start without a log file")?;

    log::info!("Starting Shell Tray...");

    let exe_dir = paths::exe_dir()?;
    let explicit_config = cli.config.as_deref().map(absolute);
    let config_path = match &explicit_config {
        Some(path) => path.clone(),
        None => paths::default_config_path()?,
    };

    let autostart = Autostart::new(paths::APP_NAME, &paths::exe_path()?, explicit_config.as_deref());
    let desktop: Rc<dyn Desktop> = Rc::new(NativeDesktop::new(autostart));

    let config = load_config(&config_path, &exe_dir, desktop.as_ref());
    let settings = tray_settings(&config, &exe_dir)?;

    let restart = match actions::restart_command() {
        Ok(command) => Some(command),
        Err(e) => {
            log::warn!("Reload disabled: {:#}", e);
            None
        }
    };

    let ctx = MenuContext {
        config: Rc::new(config),
        desktop,
        asset_dir: exe_dir,
        restart,
    };

    log::info!("Shell Tray started");
    if let Err(e) = tray::run(ctx, settings) {
        log::error!("Tray failed: {:#}", e);
        return Err(e);
    }

    log::info!("Shell Tray exited");
    Ok(())
}

/// A config that cannot be loaded leaves the tray running with only its
/// built-in entries.
fn load_config(path: &Path, exe_dir: &Path, desktop: &dyn Desktop) -> Config {
    let loaded = Config::load_or_create(path).and_then(|config| config.resolve_menu_file(exe_dir));

    match loaded {
        Ok(config) => {
            log::info!(
                "Loaded {} menu entries and {} aliases from {}",
                config.menu().len(),
                config.aliases().len(),
                path.display()
            );
            config
        }
        Err(e) => {
            log::error!("{}", e);
            desktop.show_alert(CONFIG_FAILED_TITLE, &e.to_string());
            Config::default()
        }
    }
}

fn tray_settings(config: &Config, exe_dir: &Path) -> Result<TraySettings> {
    let icon = match &config.tray_icon {
        Some(path) => match tray::icon::load_tray_icon(&paths::resolve(exe_dir, path)) {
            Ok(icon) => icon,
            Err(e) => {
                log::warn!("Using built-in tray icon: {:#}", e);
                tray::icon::create_icon()?
            }
        },
        None => tray::icon::create_icon()?,
    };

    Ok(TraySettings {
        tooltip: config.tooltip.clone().unwrap_or_else(|| tray::DEFAULT_TOOLTIP.to_string()),
        icon,
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
