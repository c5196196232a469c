mod alert;
mod autostart;

pub use alert::dialog_text;
pub use autostart::Autostart;

use crate::error::Result;

/// Platform services the menu handlers call into. Kept behind a trait so the
/// menu logic has no platform code of its own.
pub trait Desktop {
    fn is_autostart_enabled(&self) -> bool;
    fn enable_autostart(&self) -> Result<()>;
    fn disable_autostart(&self) -> Result<()>;
    fn show_alert(&self, title: &str, message: &str);
}

pub struct NativeDesktop {
    autostart: Autostart,
}

impl NativeDesktop {
    pub fn new(autostart: Autostart) -> Self {
        Self { autostart }
    }
}

impl Desktop for NativeDesktop {
    fn is_autostart_enabled(&self) -> bool {
        match self.autostart.is_enabled() {
            Ok(enabled) => enabled,
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }

    fn enable_autostart(&self) -> Result<()> {
        self.autostart.enable()
    }

    fn disable_autostart(&self) -> Result<()> {
        self.autostart.disable()
    }

    fn show_alert(&self, title: &str, message: &str) {
        alert::show(title, message);
    }
}
