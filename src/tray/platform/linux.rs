use super::handle_menu_event;
use crate::menu::builder::{build_menu, MenuContext};
use crate::menu::router::EventRouter;
use crate::tray::TraySettings;
use anyhow::{Context, Result};
use gtk::{self, glib};
use std::time::Duration;
use tray_icon::menu::{MenuEvent, MenuEventReceiver};
use tray_icon::TrayIconBuilder;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(ctx: MenuContext, settings: TraySettings) -> Result<()> {
    gtk::init().context("Failed to initialize GTK")?;

    let (menu, router) = build_menu(&ctx)?;

    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(&settings.tooltip)
        .with_icon(settings.icon)
        .build()
        .context("Failed to create tray icon")?;

    setup_event_loop(router);
    gtk::main();

    drop(tray_icon);
    Ok(())
}

fn setup_event_loop(router: EventRouter) {
    let menu_receiver = MenuEvent::receiver();

    glib::timeout_add_local(POLL_INTERVAL, move || {
        process_pending_events(menu_receiver, &router)
    });
}

fn process_pending_events(receiver: &MenuEventReceiver, router: &EventRouter) -> glib::ControlFlow {
    while let Ok(event) = receiver.try_recv() {
        if handle_menu_event(&event.id.0, router) {
            gtk::main_quit();
            return glib::ControlFlow::Break;
        }
    }
    glib::ControlFlow::Continue
}
