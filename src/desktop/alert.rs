use crate::error::{Error, Result};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Native dialogs take NUL-terminated strings, so interior NULs are rejected.
pub fn dialog_text(text: &str) -> Result<&str> {
    if text.contains('\0') {
        return Err(Error::Encoding(text.to_string()));
    }
    Ok(text)
}

fn sanitized(text: &str) -> String {
    match dialog_text(text) {
        Ok(text) => text.to_string(),
        Err(e) => {
            log::error!("Alert text: {}", e);
            text.replace('\0', "")
        }
    }
}

pub(super) fn show(title: &str, message: &str) {
    log::debug!("Showing alert: {}: {}", title, message);

    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(sanitized(title))
        .set_description(sanitized(message))
        .set_buttons(MessageButtons::Ok)
        .show();
}
