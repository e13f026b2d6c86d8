//! `UrlPort` backed by the browser address bar.

use ccy_core::UrlPort;
use wasm_bindgen::JsValue;

/// The page's own address bar.
///
/// Writes go through `history.replaceState`, so the address changes without a
/// navigation, a reload or a new back-button entry. Browser API failures are
/// logged and otherwise ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserUrl;

impl UrlPort for BrowserUrl {
    fn read(&self) -> String {
        let Some(window) = web_sys::window() else {
            log::warn!("BrowserUrl: no window, reading empty address");
            return String::new();
        };
        window.location().href().unwrap_or_else(|e| {
            log::warn!("BrowserUrl: location.href failed: {:?}", e);
            String::new()
        })
    }

    fn write(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("BrowserUrl: no window, address not updated");
            return;
        };
        let path = match window.location().pathname() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("BrowserUrl: location.pathname failed: {:?}", e);
                return;
            }
        };
        let url = format!("{}?{}", path, query);
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = replaced {
            log::warn!("BrowserUrl: history.replaceState failed: {:?}", e);
        }
    }
}
