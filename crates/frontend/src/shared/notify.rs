//! Blocking user notices

/// Show a modal browser alert. Outside a browser the message only goes to the log.
pub fn alert(message: &str) {
    log::warn!("{}", message);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
