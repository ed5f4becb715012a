//! Page navigation helper

/// Navigates the page to `url`. An absent window object is ignored; there is
/// nothing to recover in that case.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(url: &str) {
    use crate::console_error;

    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            console_error!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(url: &str) {
    tracing::info!("redirect_to({}) called outside a browser context", url);
}
