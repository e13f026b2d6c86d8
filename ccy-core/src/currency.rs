use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency as shown in the selectors.
///
/// Identity is the code. The name is a display label and, for anything placed
/// into a selection, always comes from the catalog.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Catalog key (e.g., "usd")
    pub currency_code: String,
    /// Human-readable name (e.g., "United States Dollar")
    pub currency_name: String,
}

impl Currency {
    pub fn new(currency_code: impl Into<String>, currency_name: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            currency_name: currency_name.into(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.currency_name,
            self.currency_code.to_uppercase()
        )
    }
}
