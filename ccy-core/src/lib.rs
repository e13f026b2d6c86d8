//! Core types for the currency comparison selection.
//!
//! This crate provides:
//! - `currency`: the `Currency` value shared by every layer
//! - `catalog`: the authoritative code -> display name mapping
//! - `url_codec`: reading and writing the `fromId`/`toId`/`fromName`/`toName` query
//! - `url_port`: the `UrlPort` seam over the address bar, plus an in-memory port
//! - `selection` / `store`: the two-slot selection and its URL-syncing store
//!
//! Nothing here touches the browser, so the whole selection flow runs (and is
//! tested) natively. The Dioxus layer lives in `ccy-ui`.

pub mod catalog;
pub mod currency;
pub mod selection;
pub mod store;
pub mod url_codec;
pub mod url_port;

pub use catalog::CurrencyCatalog;
pub use currency::Currency;
pub use selection::{SelectionState, Slot};
pub use store::SelectionStore;
pub use url_port::{MemoryUrl, UrlPort};
