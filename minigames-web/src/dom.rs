//! Thin wrappers over the browser globals.
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Window};

#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// `href` of the page's `<base>` element, if any.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn base_href() -> Option<String> {
    document()?
        .query_selector("base[href]")
        .ok()
        .flatten()?
        .get_attribute("href")
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub const fn base_href() -> Option<String> {
    None
}
