// Blocking browser notification, used for provider results
pub fn notify(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("Could not show alert: {}", message);
            }
        }
        None => log::warn!("No window to show alert: {}", message),
    }
}
