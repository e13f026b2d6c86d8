//! Dioxus layer for the currency comparison selection.
//!
//! This crate provides:
//! - `browser`: `BrowserUrl`, the `UrlPort` over `window.location` / `history`
//! - `state`: `AppState` and the `ChosenCurrency` selection context
//! - `hooks`: restoring the selection from the address once the catalog loads
//! - `components`: reusable RSX components (selectors, swap button, etc.)

pub mod browser;
pub mod components;
pub mod hooks;
pub mod state;
