use super::handle_menu_event;
use crate::menu::builder::{build_menu, MenuContext};
use crate::menu::router::EventRouter;
use crate::tray::TraySettings;
use anyhow::{Context, Result};
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tray_icon::menu::MenuEvent;
use tray_icon::{TrayIcon, TrayIconBuilder};

enum UserEvent {
    Menu(MenuEvent),
}

pub fn run(ctx: MenuContext, settings: TraySettings) -> Result<()> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let mut pending = Some((ctx, settings));
    let mut tray: Option<(TrayIcon, EventRouter)> = None;

    // The tray must be created after the loop has started on macOS. `run`
    // ends the process on exit, so the exit is logged from inside the loop.
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some((ctx, settings)) = pending.take() else { return };
                match create_tray(&ctx, settings) {
                    Ok(created) => tray = Some(created),
                    Err(e) => {
                        log::error!("Tray failed: {:#}", e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            Event::UserEvent(UserEvent::Menu(event)) => {
                let Some((_, router)) = &tray else { return };
                if handle_menu_event(&event.id.0, router) {
                    tray.take();
                    log::info!("Shell Tray exited");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

fn create_tray(ctx: &MenuContext, settings: TraySettings) -> Result<(TrayIcon, EventRouter)> {
    let (menu, router) = build_menu(ctx)?;

    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(&settings.tooltip)
        .with_icon(settings.icon)
        .build()
        .context("Failed to create tray icon")?;

    Ok((tray_icon, router))
}
