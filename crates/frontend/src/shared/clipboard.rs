//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. The outcome is reported through a callback so
//! callers can raise a notice either way.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the clipboard and report whether it worked
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let copied = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .is_ok()
            }
            None => false,
        };
        if !copied {
            log::warn!("clipboard write rejected");
        }
        on_done(copied);
    });
}
