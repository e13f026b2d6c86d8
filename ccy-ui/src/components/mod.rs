//! Reusable Dioxus RSX components for the currency comparison page.

mod catalog_status;
mod currency_selector;
mod page_header;
mod selection_summary;
mod swap_button;

pub use catalog_status::{CatalogStatus, CatalogStatusKind};
pub use currency_selector::{selected_currency, CurrencySelector};
pub use page_header::PageHeader;
pub use selection_summary::SelectionSummary;
pub use swap_button::SwapButton;
