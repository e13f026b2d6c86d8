//! Application state managed via Dioxus context.
//!
//! `AppState` holds the catalog and page status; `ChosenCurrency` holds the
//! selection. Both are provided with `use_context_provider` at the app root and
//! retrieved in children with `use_context::<_>()`.

use crate::browser::BrowserUrl;
use ccy_core::{Currency, CurrencyCatalog, SelectionState, SelectionStore, Slot};
use dioxus::prelude::*;

/// Shared page state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currency catalog (None until loaded)
    pub catalog: Signal<Option<CurrencyCatalog>>,
    /// Whether the catalog is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The chosen base / compare-to pair, synced to the address bar.
///
/// The whole store lives behind one signal, so every operation (including
/// `swap`) reads and writes a single consistent state.
#[derive(Clone, Copy)]
pub struct ChosenCurrency {
    store: Signal<SelectionStore<BrowserUrl>>,
}

impl ChosenCurrency {
    pub fn new() -> Self {
        Self {
            store: Signal::new(SelectionStore::new(BrowserUrl)),
        }
    }

    pub fn base_currency(&self) -> Option<Currency> {
        self.store.read().base_currency().cloned()
    }

    pub fn compare_to_currency(&self) -> Option<Currency> {
        self.store.read().compare_to_currency().cloned()
    }

    pub fn selection(&self) -> SelectionState {
        self.store.read().state().clone()
    }

    pub fn set_base(&mut self, currency: Option<Currency>) {
        self.store.write().set_base(currency);
    }

    pub fn set_compare_to(&mut self, currency: Option<Currency>) {
        self.store.write().set_compare_to(currency);
    }

    /// Set one side and rewrite the address when both sides are chosen.
    pub fn update_selection(&mut self, currency: Option<Currency>, slot: Slot) {
        self.store.write().update_selection(currency, slot);
    }

    pub fn swap(&mut self) {
        self.store.write().swap();
    }

    pub fn initialize(&mut self, catalog: &CurrencyCatalog) -> bool {
        self.store.write().initialize(catalog)
    }
}

impl Default for ChosenCurrency {
    fn default() -> Self {
        Self::new()
    }
}
