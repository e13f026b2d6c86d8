//! The selection store: single source of truth for the chosen pair, kept in
//! sync with the address bar.
//!
//! Reads never touch the port. Only `update_selection` writes it, and only when
//! the update leaves both slots populated. The address is read back once per
//! catalog in `initialize`.

use crate::catalog::CurrencyCatalog;
use crate::currency::Currency;
use crate::selection::{SelectionState, Slot};
use crate::url_codec;
use crate::url_port::UrlPort;

pub struct SelectionStore<P: UrlPort> {
    state: SelectionState,
    port: P,
}

impl<P: UrlPort> SelectionStore<P> {
    /// An empty selection over `port`. Nothing is read until `initialize`.
    pub fn new(port: P) -> Self {
        Self {
            state: SelectionState::default(),
            port,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn base_currency(&self) -> Option<&Currency> {
        self.state.base_currency.as_ref()
    }

    pub fn compare_to_currency(&self) -> Option<&Currency> {
        self.state.compare_to_currency.as_ref()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Overwrite the base slot. No validation, no URL write.
    pub fn set_base(&mut self, currency: Option<Currency>) {
        self.state.base_currency = currency;
    }

    /// Overwrite the compare-to slot. No validation, no URL write.
    pub fn set_compare_to(&mut self, currency: Option<Currency>) {
        self.state.compare_to_currency = currency;
    }

    /// Set one slot and, if both slots are then populated, rewrite the address
    /// to carry the resulting pair.
    ///
    /// Clearing a slot leaves the address as it was.
    pub fn update_selection(&mut self, currency: Option<Currency>, slot: Slot) {
        self.state.set_slot(slot, currency);
        let Some((base, compare_to)) = self.state.pair() else {
            return;
        };
        let query = url_codec::encode(&self.port.read(), base, compare_to);
        log::debug!(
            "selection: {} -> {}, writing address",
            base.currency_code,
            compare_to.currency_code
        );
        self.port.write(&query);
    }

    /// Exchange base and compare-to.
    ///
    /// Both old values are taken from the same state before either slot is
    /// reassigned. The address is not rewritten.
    pub fn swap(&mut self) {
        self.state.swap();
    }

    /// Restore the pair from the address once the catalog has loaded.
    ///
    /// Does nothing while the catalog is empty. A missing parameter or a code
    /// the catalog does not know leaves the selection untouched; names always
    /// come from the catalog. Returns whether the selection was restored.
    pub fn initialize(&mut self, catalog: &CurrencyCatalog) -> bool {
        if !catalog.is_ready() {
            return false;
        }
        let address = self.port.read();
        let Some(url) = url_codec::decode(&address) else {
            log::debug!("selection: no previous pair in address");
            return false;
        };
        match SelectionState::restored(catalog, &url) {
            Some(state) => {
                log::info!(
                    "selection: restored {} -> {} from address",
                    url.from_code,
                    url.to_code
                );
                self.state = state;
                true
            }
            None => {
                log::debug!(
                    "selection: ignoring address pair {} -> {} not in catalog",
                    url.from_code,
                    url.to_code
                );
                false
            }
        }
    }
}
