//! The seam between the selection and the address bar.

use crate::url_codec;
use std::cell::RefCell;
use std::rc::Rc;

/// Access to the page address.
///
/// `read` returns the current address (at least path and query, a full href is
/// fine). `write` replaces the query of the current history entry with `query`
/// (no leading `?`) without navigating or adding a history entry.
pub trait UrlPort {
    fn read(&self) -> String;
    fn write(&self, query: &str);
}

impl<P: UrlPort + ?Sized> UrlPort for Rc<P> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, query: &str) {
        (**self).write(query)
    }
}

#[derive(Debug, Default)]
struct MemoryAddress {
    href: String,
    writes: usize,
}

/// An address bar that lives in memory.
///
/// Cheaply cloneable (via `Rc`); clones share the same address, so a test can
/// hand one clone to a store and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryUrl {
    inner: Rc<RefCell<MemoryAddress>>,
}

impl MemoryUrl {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryAddress {
                href: href.into(),
                writes: 0,
            })),
        }
    }

    pub fn href(&self) -> String {
        self.inner.borrow().href.clone()
    }

    /// Query portion of the current address.
    pub fn query(&self) -> String {
        url_codec::query_of(&self.inner.borrow().href).to_string()
    }

    /// Number of `write` calls so far.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl UrlPort for MemoryUrl {
    fn read(&self) -> String {
        self.href()
    }

    fn write(&self, query: &str) {
        let mut address = self.inner.borrow_mut();
        let path = url_codec::path_of(&address.href).to_string();
        address.href = format!("{}?{}", path, query);
        address.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryUrl, UrlPort};
    use std::rc::Rc;

    #[test]
    fn write_keeps_path_and_replaces_query() {
        let url = MemoryUrl::new("/compare?old=1#frag");
        url.write("fromId=usd");
        assert_eq!(url.href(), "/compare?fromId=usd");
        assert_eq!(url.query(), "fromId=usd");
        assert_eq!(url.writes(), 1);
    }

    #[test]
    fn clones_share_the_address() {
        let url = MemoryUrl::new("/");
        let other = url.clone();
        other.write("a=b");
        assert_eq!(url.read(), "/?a=b");
    }

    #[test]
    fn rc_of_port_is_a_port() {
        let url = MemoryUrl::new("/x");
        let shared: Rc<dyn UrlPort> = Rc::new(url.clone());
        shared.write("k=v");
        assert_eq!(shared.read(), "/x?k=v");
        assert_eq!(url.writes(), 1);
    }
}
