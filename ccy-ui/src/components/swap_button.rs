//! Button exchanging base and compare-to.

use crate::state::ChosenCurrency;
use dioxus::prelude::*;

/// Swaps the two sides. Disabled while nothing is selected.
#[component]
pub fn SwapButton() -> Element {
    let mut chosen = use_context::<ChosenCurrency>();
    let nothing_selected = chosen.selection().is_empty();

    rsx! {
        button {
            r#type: "button",
            title: "Swap currencies",
            style: "margin: 4px 0; padding: 4px 12px; cursor: pointer;",
            disabled: nothing_selected,
            onclick: move |_| chosen.swap(),
            "⇅ Swap"
        }
    }
}
