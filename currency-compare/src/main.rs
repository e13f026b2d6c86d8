//! Currency comparison picker
//!
//! Two dropdowns choose a base and a compare-to currency. The pair is mirrored
//! into the page query (`fromId`, `toId`, `fromName`, `toName`) so a reload or
//! a shared link comes back to the same selection.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/currencies.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the catalog into the WASM binary.
//! 3. On mount: parse the catalog into `AppState::catalog`.
//! 4. Once the catalog is set, the selection is restored from the address.
//! 5. Every selector change with both sides chosen rewrites the address.

use ccy_core::{CurrencyCatalog, Slot};
use ccy_ui::components::{
    CatalogStatus, CurrencySelector, PageHeader, SelectionSummary, SwapButton,
};
use ccy_ui::hooks::use_restore_selection;
use ccy_ui::state::{AppState, ChosenCurrency};
use dioxus::prelude::*;

const CATALOG_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/currencies.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("currency-compare-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_context_provider(ChosenCurrency::new);

    // ─── Parse the catalog once on mount ───
    use_effect(move || {
        match CurrencyCatalog::from_csv(CATALOG_CSV) {
            Ok(catalog) if catalog.is_ready() => state.catalog.set(Some(catalog)),
            Ok(_) => {
                state
                    .error_msg
                    .set(Some("the currency catalog is empty.".to_string()));
            }
            Err(e) => {
                log::error!("catalog failed to load: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "max-width: 480px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: "Compare currencies".to_string(),
                subtitle: "Your selection is kept in the page link, so you can bookmark or share it.".to_string(),
            }

            CatalogStatus {}

            if state.catalog.read().is_some() {
                SelectionPanel {}
            }
        }
    }
}

/// Both selectors and the swap button. Mounted once the catalog is available.
#[component]
fn SelectionPanel() -> Element {
    use_restore_selection();

    rsx! {
        section {
            CurrencySelector { slot: Slot::Base }
            SwapButton {}
            CurrencySelector { slot: Slot::CompareTo }
            SelectionSummary {}
        }
    }
}
