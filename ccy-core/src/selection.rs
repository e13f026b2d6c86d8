//! The two-slot currency selection.

use crate::catalog::CurrencyCatalog;
use crate::currency::Currency;
use crate::url_codec::UrlSelection;

/// Which side of the comparison an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The "from" side
    Base,
    /// The "to" side
    CompareTo,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::Base => "Base currency",
            Slot::CompareTo => "Compare to",
        }
    }
}

/// Base and compare-to currencies. Either, both or neither may be set, and
/// nothing stops them from being the same currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub base_currency: Option<Currency>,
    pub compare_to_currency: Option<Currency>,
}

impl SelectionState {
    pub fn new(base_currency: Option<Currency>, compare_to_currency: Option<Currency>) -> Self {
        Self {
            base_currency,
            compare_to_currency,
        }
    }

    pub fn slot(&self, slot: Slot) -> Option<&Currency> {
        match slot {
            Slot::Base => self.base_currency.as_ref(),
            Slot::CompareTo => self.compare_to_currency.as_ref(),
        }
    }

    pub fn set_slot(&mut self, slot: Slot, currency: Option<Currency>) {
        match slot {
            Slot::Base => self.base_currency = currency,
            Slot::CompareTo => self.compare_to_currency = currency,
        }
    }

    /// Exchange the two slots in place.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.base_currency, &mut self.compare_to_currency);
    }

    /// Both currencies, when both are selected.
    pub fn pair(&self) -> Option<(&Currency, &Currency)> {
        Some((self.base_currency.as_ref()?, self.compare_to_currency.as_ref()?))
    }

    pub fn is_empty(&self) -> bool {
        self.base_currency.is_none() && self.compare_to_currency.is_none()
    }

    /// Validate a decoded URL pair against the catalog.
    ///
    /// Both codes must be known. Names are taken from the catalog; the URL's
    /// names are ignored. A half-valid pair yields `None`.
    pub fn restored(catalog: &CurrencyCatalog, url: &UrlSelection) -> Option<Self> {
        let base = catalog.resolve(&url.from_code)?;
        let compare_to = catalog.resolve(&url.to_code)?;
        Some(Self::new(Some(base), Some(compare_to)))
    }
}
