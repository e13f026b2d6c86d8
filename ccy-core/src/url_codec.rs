//! Reading and writing the selected pair in a URL query string.
//!
//! The pair travels as four `application/x-www-form-urlencoded` parameters:
//!
//! ```text
//! ?fromId=usd&toId=eur&fromName=United+States+Dollar&toName=Euro
//! ```
//!
//! The codec is pure: it neither touches the address bar nor consults the
//! catalog. Validation of the decoded codes belongs to the selection.

use crate::currency::Currency;

/// The query parameters owned by the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchParam {
    FromId,
    ToId,
    FromName,
    ToName,
}

impl SearchParam {
    /// In the order they are appended when missing from the address.
    pub const ALL: [SearchParam; 4] = [
        SearchParam::FromId,
        SearchParam::ToId,
        SearchParam::FromName,
        SearchParam::ToName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchParam::FromId => "fromId",
            SearchParam::ToId => "toId",
            SearchParam::FromName => "fromName",
            SearchParam::ToName => "toName",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

/// The four parameters exactly as found in the URL. Names are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSelection {
    pub from_code: String,
    pub to_code: String,
    pub from_name: String,
    pub to_name: String,
}

/// Strip the fragment and return the query portion of `address`.
///
/// Accepts a full href, a path with query, or a bare query string. A path with
/// no `?` has an empty query.
pub fn query_of(address: &str) -> &str {
    let address = strip_fragment(address);
    match address.split_once('?') {
        Some((_, query)) => query,
        None if is_bare_query(address) => address,
        None => "",
    }
}

/// Everything before the query (scheme, host and path as given).
pub fn path_of(address: &str) -> &str {
    let address = strip_fragment(address);
    match address.split_once('?') {
        Some((path, _)) => path,
        None if is_bare_query(address) => "",
        None => address,
    }
}

/// A `?`-less address is a query unless it is rooted or has a scheme.
/// Values may contain `/` (e.g. `ret=/home`).
fn is_bare_query(address: &str) -> bool {
    address.contains('=') && !address.starts_with('/') && !address.contains("://")
}

fn strip_fragment(address: &str) -> &str {
    address.split_once('#').map_or(address, |(head, _)| head)
}

/// Read the pair from `address`.
///
/// Returns `None` unless all four parameters are present with non-empty values.
/// When a key repeats, its first occurrence wins.
pub fn decode(address: &str) -> Option<UrlSelection> {
    let mut found: [Option<String>; 4] = Default::default();
    for (key, value) in form_urlencoded::parse(query_of(address).as_bytes()) {
        let Some(param) = SearchParam::from_key(&key) else {
            continue;
        };
        let slot = &mut found[param as usize];
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let [from_code, to_code, from_name, to_name] = found.map(|v| v.filter(|s| !s.is_empty()));
    Some(UrlSelection {
        from_code: from_code?,
        to_code: to_code?,
        from_name: from_name?,
        to_name: to_name?,
    })
}

/// Write the pair into the query of `address` and return the new query string
/// (no leading `?`).
///
/// Only the four selection keys are touched: a key already present is
/// overwritten where it stands and any later duplicates of it are dropped;
/// missing keys are appended. Every other parameter is kept in order.
pub fn encode(address: &str, base: &Currency, compare_to: &Currency) -> String {
    let values = [
        base.currency_code.as_str(),
        compare_to.currency_code.as_str(),
        base.currency_name.as_str(),
        compare_to.currency_name.as_str(),
    ];
    let mut written = [false; 4];

    let mut out = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query_of(address).as_bytes()) {
        match SearchParam::from_key(&key) {
            Some(param) => {
                let i = param as usize;
                if !written[i] {
                    out.append_pair(&key, values[i]);
                    written[i] = true;
                }
            }
            None => {
                out.append_pair(&key, &value);
            }
        }
    }
    for param in SearchParam::ALL {
        let i = param as usize;
        if !written[i] {
            out.append_pair(param.as_str(), values[i]);
        }
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        Currency::new("usd", "United States Dollar")
    }

    fn eur() -> Currency {
        Currency::new("eur", "Euro")
    }

    #[test]
    fn decode_reads_all_four_params() {
        let sel = decode("https://example.com/compare?fromId=usd&toId=eur&fromName=US&toName=Euro")
            .unwrap();
        assert_eq!(sel.from_code, "usd");
        assert_eq!(sel.to_code, "eur");
        assert_eq!(sel.from_name, "US");
        assert_eq!(sel.to_name, "Euro");
    }

    #[test]
    fn decode_requires_every_param() {
        assert!(decode("/?fromId=usd&toId=eur&fromName=US").is_none());
        assert!(decode("/?toId=eur&fromName=US&toName=Euro").is_none());
        assert!(decode("/compare").is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn decode_treats_empty_values_as_missing() {
        assert!(decode("/?fromId=&toId=eur&fromName=US&toName=Euro").is_none());
    }

    #[test]
    fn decode_does_not_validate_codes() {
        let sel = decode("/?fromId=XXX&toId=eur&fromName=Nope&toName=Euro").unwrap();
        assert_eq!(sel.from_code, "XXX");
    }

    #[test]
    fn decode_percent_and_plus_decoding() {
        let sel = decode("/?fromId=usd&toId=eur&fromName=United+States%20Dollar&toName=Euro")
            .unwrap();
        assert_eq!(sel.from_name, "United States Dollar");
    }

    #[test]
    fn decode_first_occurrence_wins_and_fragment_ignored() {
        let sel = decode("/?fromId=usd&fromId=gbp&toId=eur&fromName=a&toName=b#toId=jpy").unwrap();
        assert_eq!(sel.from_code, "usd");
        assert_eq!(sel.to_code, "eur");
        assert_eq!(sel.to_name, "b");
    }

    #[test]
    fn decode_accepts_bare_query() {
        let sel = decode("fromId=usd&toId=eur&fromName=a&toName=b").unwrap();
        assert_eq!(sel.to_code, "eur");
    }

    #[test]
    fn decode_of_encode_gives_back_the_pair() {
        let (a, b) = (usd(), eur());
        let query = encode("/", &a, &b);
        let sel = decode(&query).unwrap();
        assert_eq!(
            sel,
            UrlSelection {
                from_code: a.currency_code.clone(),
                to_code: b.currency_code.clone(),
                from_name: a.currency_name.clone(),
                to_name: b.currency_name.clone(),
            }
        );
    }

    #[test]
    fn encode_on_empty_query_has_exactly_four_params_in_order() {
        let query = encode("/compare", &usd(), &eur());
        assert_eq!(
            query,
            "fromId=usd&toId=eur&fromName=United+States+Dollar&toName=Euro"
        );
    }

    #[test]
    fn encode_keeps_unrelated_params() {
        let query = encode("/compare?theme=dark&lang=en", &usd(), &eur());
        assert_eq!(
            query,
            "theme=dark&lang=en&fromId=usd&toId=eur&fromName=United+States+Dollar&toName=Euro"
        );
    }

    #[test]
    fn encode_overwrites_in_place_and_drops_duplicates() {
        let query = encode(
            "/?toId=jpy&theme=dark&toId=gbp&fromId=aud",
            &usd(),
            &eur(),
        );
        assert_eq!(
            query,
            "toId=eur&theme=dark&fromId=usd&fromName=United+States+Dollar&toName=Euro"
        );
    }

    #[test]
    fn bare_query_values_may_contain_slashes() {
        let sel = decode("fromId=usd&toId=eur&fromName=US&toName=Euro&ret=/home").unwrap();
        assert_eq!(sel.from_code, "usd");
        assert_eq!(sel.to_name, "Euro");

        let query = encode("ret=/home", &usd(), &eur());
        assert_eq!(
            query,
            "ret=%2Fhome&fromId=usd&toId=eur&fromName=United+States+Dollar&toName=Euro"
        );
        assert_eq!(path_of("ret=/home"), "");
    }

    #[test]
    fn rooted_or_absolute_addresses_are_not_queries() {
        assert_eq!(query_of("/a=b"), "");
        assert_eq!(path_of("/a=b"), "/a=b");
        assert_eq!(query_of("https://example.com/x=1"), "");
    }

    #[test]
    fn path_and_query_split() {
        assert_eq!(path_of("/a/b?x=1#f"), "/a/b");
        assert_eq!(query_of("/a/b?x=1#f"), "x=1");
        assert_eq!(path_of("/a/b"), "/a/b");
        assert_eq!(query_of("/a/b"), "");
        assert_eq!(path_of("x=1"), "");
    }

    #[test]
    fn search_param_keys_are_exact() {
        let keys: Vec<&str> = SearchParam::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(keys, vec!["fromId", "toId", "fromName", "toName"]);
        assert_eq!(SearchParam::from_key("toName"), Some(SearchParam::ToName));
        assert_eq!(SearchParam::from_key("toname"), None);
    }
}
