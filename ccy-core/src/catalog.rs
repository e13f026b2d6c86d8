//! The currency catalog: authoritative code -> display name mapping.
//!
//! The catalog is owned by whatever fetches currency data; the selection only
//! reads it to validate codes coming from the URL and to look up names.
//!
//! # Formats
//!
//! - **CSV** (has headers): `code,name`
//! - **JSON**: a single object mapping code to name, `{"usd": "United States Dollar"}`

use crate::currency::Currency;
use anyhow::Context;
use std::collections::BTreeMap;

/// Code -> name mapping, ordered by code.
///
/// An empty catalog is "not ready": the selection will not restore from the
/// URL until at least one currency is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    names: BTreeMap<String, String>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Load the catalog from a CSV string.
    ///
    /// Expected format (with headers): `code,name`
    ///
    /// # Example CSV
    /// ```text
    /// code,name
    /// usd,United States Dollar
    /// eur,Euro
    /// ```
    ///
    /// Rows with an empty code are skipped. A repeated code keeps the last name.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut catalog = Self::new();
        let mut skipped = 0u32;
        for (line, result) in rdr.records().enumerate() {
            let r = result.with_context(|| format!("malformed catalog row {}", line + 1))?;
            let code = r.get(0).unwrap_or("").trim();
            let name = r.get(1).unwrap_or("").trim();
            if code.is_empty() {
                skipped += 1;
                continue;
            }
            catalog.insert(code, name);
        }
        log::info!(
            "catalog: loaded {} currencies ({} rows skipped)",
            catalog.len(),
            skipped
        );
        Ok(catalog)
    }

    /// Load the catalog from a JSON object of code -> name.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let names: BTreeMap<String, String> =
            serde_json::from_str(json).context("catalog JSON must be an object of code to name")?;
        log::info!("catalog: loaded {} currencies from JSON", names.len());
        Ok(Self { names })
    }

    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.names.insert(code.into(), name.into());
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    /// Build a `Currency` for `code` using the catalog's name, if the code is known.
    pub fn resolve(&self, code: &str) -> Option<Currency> {
        self.name_of(code).map(|name| Currency::new(code, name))
    }

    /// Whether the catalog has loaded anything yet.
    pub fn is_ready(&self) -> bool {
        !self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All currencies, sorted by code.
    pub fn currencies(&self) -> Vec<Currency> {
        self.names
            .iter()
            .map(|(code, name)| Currency::new(code.as_str(), name.as_str()))
            .collect()
    }
}
