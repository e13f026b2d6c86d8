//! Command implementations for the CCY CLI.
//!
//! Every command runs the same selection store the web app uses, over an
//! in-memory address instead of the browser's.

use anyhow::{anyhow, bail, Context};
use ccy_core::{CurrencyCatalog, MemoryUrl, SelectionState, SelectionStore, Slot};
use clap::Subcommand;
use std::fs;
use std::path::Path;

const DEFAULT_CATALOG_CSV: &str = include_str!("../../fixtures/currencies.csv");

#[derive(Subcommand)]
pub enum Command {
    /// Show the selection a link restores to
    Decode {
        /// Link, path with query, or bare query string
        address: String,

        /// Catalog file (`code,name` CSV, or a `.json` object); defaults to the built-in list
        #[arg(short = 'c', long)]
        catalog: Option<String>,
    },

    /// Print `address` with a comparison pair written into its query
    Link {
        /// Link to start from; its other query parameters are kept
        address: String,

        /// Base currency code
        #[arg(short = 'f', long)]
        from: String,

        /// Compare-to currency code
        #[arg(short = 't', long)]
        to: String,

        /// Catalog file (`code,name` CSV, or a `.json` object); defaults to the built-in list
        #[arg(short = 'c', long)]
        catalog: Option<String>,
    },

    /// List the currencies in the catalog
    List {
        /// Catalog file (`code,name` CSV, or a `.json` object); defaults to the built-in list
        #[arg(short = 'c', long)]
        catalog: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Decode { address, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            match restore(&catalog, &address)? {
                Some(state) => {
                    if let Some((base, compare_to)) = state.pair() {
                        println!("base:       {}", base);
                        println!("compare to: {}", compare_to);
                    }
                }
                None => println!("no valid selection in address"),
            }
            Ok(())
        }
        Command::Link {
            address,
            from,
            to,
            catalog,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            println!("{}", link(&catalog, &address, &from, &to)?);
            Ok(())
        }
        Command::List { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            for currency in catalog.currencies() {
                println!("{}\t{}", currency.currency_code, currency.currency_name);
            }
            Ok(())
        }
    }
}

/// Load a catalog file, or the built-in one when `path` is `None`.
fn load_catalog(path: Option<&str>) -> anyhow::Result<CurrencyCatalog> {
    let Some(path) = path else {
        return CurrencyCatalog::from_csv(DEFAULT_CATALOG_CSV);
    };
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read catalog {}", path))?;
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        CurrencyCatalog::from_json(&contents)
    } else {
        CurrencyCatalog::from_csv(&contents)
    };
    parsed.with_context(|| format!("failed to parse catalog {}", path))
}

/// The selection `address` restores to, if any.
fn restore(catalog: &CurrencyCatalog, address: &str) -> anyhow::Result<Option<SelectionState>> {
    if !catalog.is_ready() {
        bail!("catalog is empty");
    }
    let mut store = SelectionStore::new(MemoryUrl::new(address));
    if store.initialize(catalog) {
        Ok(Some(store.state().clone()))
    } else {
        Ok(None)
    }
}

/// `address` with `from` / `to` written into its query.
fn link(catalog: &CurrencyCatalog, address: &str, from: &str, to: &str) -> anyhow::Result<String> {
    let base = catalog
        .resolve(from)
        .ok_or_else(|| anyhow!("unknown currency code '{}'", from))?;
    let compare_to = catalog
        .resolve(to)
        .ok_or_else(|| anyhow!("unknown currency code '{}'", to))?;

    let url = MemoryUrl::new(address);
    let mut store = SelectionStore::new(url.clone());
    store.set_compare_to(Some(compare_to));
    store.update_selection(Some(base), Slot::Base);
    log::debug!("link: {} write(s) to address", url.writes());
    Ok(url.href())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CurrencyCatalog {
        CurrencyCatalog::from_pairs([("usd", "United States Dollar"), ("eur", "Euro")])
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = load_catalog(None).unwrap();
        assert!(catalog.is_ready());
        assert!(catalog.contains("usd"));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        assert!(load_catalog(Some("/definitely/not/here.csv")).is_err());
    }

    #[test]
    fn link_writes_pair_and_keeps_other_params() {
        let link = link(&catalog(), "https://fx.example/compare?lang=en", "usd", "eur").unwrap();
        assert_eq!(
            link,
            "https://fx.example/compare?lang=en&fromId=usd&toId=eur&fromName=United+States+Dollar&toName=Euro"
        );
    }

    #[test]
    fn link_from_bare_query_keeps_slash_values() {
        let link = link(&catalog(), "ret=/home", "usd", "eur").unwrap();
        assert_eq!(
            link,
            "?ret=%2Fhome&fromId=usd&toId=eur&fromName=United+States+Dollar&toName=Euro"
        );
    }

    #[test]
    fn link_rejects_unknown_codes() {
        let err = link(&catalog(), "/", "usd", "xxx").unwrap_err();
        assert!(err.to_string().contains("xxx"));
    }

    #[test]
    fn decode_of_link_restores_pair() {
        let link = link(&catalog(), "/compare", "eur", "usd").unwrap();
        let state = restore(&catalog(), &link).unwrap().unwrap();
        let (base, compare_to) = state.pair().unwrap();
        assert_eq!(base.currency_code, "eur");
        assert_eq!(compare_to.currency_code, "usd");
    }

    #[test]
    fn tampered_link_restores_nothing() {
        let state = restore(
            &catalog(),
            "/compare?fromId=XXX&toId=eur&fromName=x&toName=Euro",
        )
        .unwrap();
        assert!(state.is_none());
    }

    #[test]
    fn restore_needs_a_catalog() {
        assert!(restore(&CurrencyCatalog::new(), "/").is_err());
    }
}
