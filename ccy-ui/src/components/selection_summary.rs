//! One-line summary of the current selection.

use crate::state::ChosenCurrency;
use dioxus::prelude::*;

#[component]
pub fn SelectionSummary() -> Element {
    let chosen = use_context::<ChosenCurrency>();
    let selection = chosen.selection();

    let text = match selection.pair() {
        Some((base, compare_to)) => format!("Comparing {} with {}", base, compare_to),
        None => match (&selection.base_currency, &selection.compare_to_currency) {
            (Some(base), None) => format!("{} selected, pick a currency to compare to.", base),
            (None, Some(compare_to)) => format!("Pick a base currency to compare with {}.", compare_to),
            _ => "Pick two currencies to compare.".to_string(),
        },
    };

    rsx! {
        p {
            style: "font-size: 14px; color: #333; margin: 8px 0;",
            "{text}"
        }
    }
}
