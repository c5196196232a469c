use super::actions;
use super::layout::{self, MenuEntry};
use super::resolve::ResolvedCommand;
use super::router::{EventRouter, Flow};
use crate::config::Config;
use crate::desktop::Desktop;
use crate::paths;
use crate::tray::icon;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tray_icon::menu::{CheckMenuItem, IconMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};

pub const RELOAD_ID: &str = "__reload__";
pub const AUTOSTART_ID: &str = "__autostart__";
pub const QUIT_ID: &str = "__quit__";

/// Everything the menu and its handlers share. Built once at startup.
pub struct MenuContext {
    pub config: Rc<Config>,
    pub desktop: Rc<dyn Desktop>,
    /// Base for relative icon paths.
    pub asset_dir: PathBuf,
    /// `None` hides the Reload entry.
    pub restart: Option<ResolvedCommand>,
}

pub fn build_menu(ctx: &MenuContext) -> Result<(Menu, EventRouter)> {
    let menu = Menu::new();
    let mut router = EventRouter::new();

    let entries = layout::layout(ctx.config.menu());
    for entry in &entries {
        append_entry(Parent::Root(&menu), entry, ctx)?;
    }
    register_node_routes(&entries, ctx, &mut router);

    if !entries.is_empty() {
        menu.append(&PredefinedMenuItem::separator())?;
    }

    if ctx.restart.is_some() {
        menu.append(&MenuItem::with_id(RELOAD_ID, "Reload", true, None))?;
    }

    let autostart_item = CheckMenuItem::with_id(
        AUTOSTART_ID,
        "Start at login",
        true,
        ctx.desktop.is_autostart_enabled(),
        None,
    );
    menu.append(&autostart_item)?;
    menu.append(&MenuItem::with_id(QUIT_ID, "Quit", true, None))?;

    register_system_routes(ctx, &mut router, move |enabled| autostart_item.set_checked(enabled));

    log::debug!("Menu built with {} routes", router.len());
    Ok((menu, router))
}

/// One launch route per leaf. Each route owns its node's command and a
/// handle on the shared config.
pub fn register_node_routes(entries: &[MenuEntry], ctx: &MenuContext, router: &mut EventRouter) {
    for entry in layout::actions(entries) {
        let MenuEntry::Action { id, command, .. } = entry else { continue };

        let command = command.clone();
        let config = Rc::clone(&ctx.config);
        let desktop = Rc::clone(&ctx.desktop);
        router.register(
            id.clone(),
            Box::new(move |_| Ok(actions::launch_node(&command, &config, desktop.as_ref()))),
        );
    }
}

pub fn register_system_routes(
    ctx: &MenuContext,
    router: &mut EventRouter,
    on_autostart_changed: impl Fn(bool) + 'static,
) {
    if let Some(restart) = ctx.restart.clone() {
        let desktop = Rc::clone(&ctx.desktop);
        router.register(
            RELOAD_ID,
            Box::new(move |_| Ok(actions::reload(&restart, desktop.as_ref()))),
        );
    }

    let desktop = Rc::clone(&ctx.desktop);
    router.register(
        AUTOSTART_ID,
        Box::new(move |_| {
            let enabled = actions::toggle_autostart(desktop.as_ref());
            on_autostart_changed(enabled);
            Ok(Flow::Continue)
        }),
    );

    router.register(
        QUIT_ID,
        Box::new(|_| {
            log::info!("Quit requested");
            Ok(Flow::Quit)
        }),
    );
}

enum Parent<'a> {
    Root(&'a Menu),
    Submenu(&'a Submenu),
}

impl Parent<'_> {
    fn append(&self, item: &dyn IsMenuItem) -> Result<()> {
        match self {
            Parent::Root(menu) => menu.append(item)?,
            Parent::Submenu(submenu) => submenu.append(item)?,
        }
        Ok(())
    }
}

fn append_entry(parent: Parent<'_>, entry: &MenuEntry, ctx: &MenuContext) -> Result<()> {
    match entry {
        MenuEntry::Submenu { id, label, children } => {
            log::debug!("Creating submenu with ID: {}", id);
            let submenu = Submenu::with_id(id, label, true);
            for child in children {
                append_entry(Parent::Submenu(&submenu), child, ctx)?;
            }
            parent.append(&submenu)
        }
        MenuEntry::Action { id, label, icon: Some(icon_ref), .. } => {
            match icon::load_menu_icon(&paths::resolve(&ctx.asset_dir, Path::new(icon_ref))) {
                Ok(menu_icon) => parent.append(&IconMenuItem::with_id(id, label, true, Some(menu_icon), None)),
                Err(e) => {
                    log::warn!("Icon for {:?} not loaded: {:#}", label, e);
                    parent.append(&MenuItem::with_id(id, label, true, None))
                }
            }
        }
        MenuEntry::Action { id, label, icon: None, .. } => {
            parent.append(&MenuItem::with_id(id, label, true, None))
        }
    }
}
