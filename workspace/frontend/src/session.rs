//! Browser-cookie handling for the demo auth marker.
//!
//! A single static cookie stands in for a session; nothing else persists
//! across reloads. The marker is never validated beyond its presence.

use common::auth;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Write the static auth marker after a successful login.
pub fn store_auth_cookie() {
    if let Some(doc) = html_document() {
        if let Err(err) = doc.set_cookie(&auth::cookie_string()) {
            log::error!("Failed to write auth cookie: {:?}", err);
        }
    }
}

/// Expire the auth marker.
pub fn clear_auth_cookie() {
    if let Some(doc) = html_document() {
        if let Err(err) = doc.set_cookie(&auth::cookie_clear_string()) {
            log::error!("Failed to clear auth cookie: {:?}", err);
        }
    }
}

/// Whether the auth marker is present.
pub fn has_auth_cookie() -> bool {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .map(|cookies| auth::cookie_has_marker(&cookies))
        .unwrap_or(false)
}
