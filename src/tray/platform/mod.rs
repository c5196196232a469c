#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod standard;

#[cfg(target_os = "linux")]
pub use linux::run;

#[cfg(not(target_os = "linux"))]
pub use standard::run;

use crate::menu::router::{EventRouter, Flow};

/// Routes one menu event. Returns true when the loop should stop.
fn handle_menu_event(event_id: &str, router: &EventRouter) -> bool {
    log::debug!("Menu event: {}", event_id);

    match router.route(event_id) {
        Ok(Flow::Continue) => false,
        Ok(Flow::Quit) => {
            log::info!("Quitting application");
            true
        }
        Err(e) => {
            log::error!("Error handling menu event: {:#}", e);
            false
        }
    }
}
