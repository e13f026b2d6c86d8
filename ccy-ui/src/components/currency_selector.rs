//! Dropdown selector for one side of the comparison.

use crate::state::{AppState, ChosenCurrency};
use ccy_core::{Currency, CurrencyCatalog, Slot};
use dioxus::prelude::*;

/// Map a `<select>` value back to a catalog currency. The empty option clears.
pub fn selected_currency(catalog: &CurrencyCatalog, value: &str) -> Option<Currency> {
    if value.is_empty() {
        return None;
    }
    catalog.resolve(value)
}

fn select_id(slot: Slot) -> &'static str {
    match slot {
        Slot::Base => "base-currency-select",
        Slot::CompareTo => "compare-to-currency-select",
    }
}

/// Currency dropdown for `slot`.
/// Lists the catalog and routes changes through `update_selection`, so the
/// address follows once both sides are chosen.
#[component]
pub fn CurrencySelector(slot: Slot) -> Element {
    let state = use_context::<AppState>();
    let mut chosen = use_context::<ChosenCurrency>();

    let currencies = state
        .catalog
        .read()
        .as_ref()
        .map(CurrencyCatalog::currencies)
        .unwrap_or_default();
    let selected = chosen
        .selection()
        .slot(slot)
        .map(|c| c.currency_code.clone())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let currency = state
            .catalog
            .read()
            .as_ref()
            .and_then(|catalog| selected_currency(catalog, &value));
        chosen.update_selection(currency, slot);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: select_id(slot),
                style: "font-weight: bold; margin-right: 8px;",
                "{slot.label()}: "
            }
            select {
                id: select_id(slot),
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select a currency"
                }
                for currency in currencies.iter() {
                    option {
                        value: "{currency.currency_code}",
                        selected: currency.currency_code == selected,
                        "{currency}"
                    }
                }
            }
        }
    }
}
