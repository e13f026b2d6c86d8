//! Catalog status line: loading, failed, or how many currencies are on offer.

use crate::state::AppState;
use dioxus::prelude::*;

/// What the status line says for a given catalog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatusKind {
    Loading,
    Failed(String),
    Ready(usize),
}

impl CatalogStatusKind {
    pub fn message(&self) -> String {
        match self {
            CatalogStatusKind::Loading => "Loading currencies...".to_string(),
            CatalogStatusKind::Failed(reason) => {
                format!("Currencies unavailable, nothing can be selected: {}", reason)
            }
            CatalogStatusKind::Ready(1) => "1 currency available.".to_string(),
            CatalogStatusKind::Ready(n) => format!("{} currencies available.", n),
        }
    }
}

/// Reads `AppState` and reports where the catalog is. Errors win over loading.
#[component]
pub fn CatalogStatus() -> Element {
    let state = use_context::<AppState>();
    let kind = match (state.error_msg)() {
        Some(reason) => CatalogStatusKind::Failed(reason),
        None if (state.loading)() => CatalogStatusKind::Loading,
        None => CatalogStatusKind::Ready(state.catalog.read().as_ref().map_or(0, |c| c.len())),
    };

    let style = match kind {
        CatalogStatusKind::Failed(_) => "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
        CatalogStatusKind::Loading => "padding: 24px; text-align: center; color: #666;",
        CatalogStatusKind::Ready(_) => "margin: 4px 0; font-size: 11px; color: #888;",
    };
    let role = if matches!(kind, CatalogStatusKind::Failed(_)) {
        "alert"
    } else {
        "status"
    };
    let message = kind.message();

    rsx! {
        p {
            "role": role,
            style: "{style}",
            "{message}"
        }
    }
}
