//! Hooks wiring the selection to the catalog.

use crate::state::{AppState, ChosenCurrency};
use dioxus::prelude::*;

/// Restore the selection from the address whenever the catalog changes.
///
/// Requires `AppState` and `ChosenCurrency` in context. The effect re-runs on
/// every write to `AppState::catalog`; until a non-empty catalog is present it
/// does nothing.
pub fn use_restore_selection() {
    let state = use_context::<AppState>();
    let mut chosen = use_context::<ChosenCurrency>();

    use_effect(move || {
        let catalog = state.catalog.read();
        if let Some(catalog) = catalog.as_ref() {
            chosen.initialize(catalog);
        }
    });
}
