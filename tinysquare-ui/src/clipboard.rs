//! Clipboard adapter.

/// Copy text to the system clipboard.
///
/// Fire-and-forget: the returned promise is not awaited or checked. A
/// missing clipboard capability (insecure context, old browser) skips the
/// copy without surfacing an error.
pub fn copy_text(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        log::debug!("clipboard unavailable, skipping copy");
        return;
    }
    let _ = clipboard.write_text(text);
}
