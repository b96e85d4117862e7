//! Accessor objects bound to a single section.
//!
//! These are convenience wrappers over [`Store::get`]/[`Store::set`] — not a
//! separate data path.  The read view never materialises anything; the write
//! view creates its section (and keys) on demand, the first time something
//! is assigned through it.

use std::fmt;

use crate::store::map::Store;
use crate::value::FromIni;

/// Read-only view of one section.
///
/// Missing keys — and a missing section — yield `None` rather than a panic,
/// so a view over a section that does not exist is perfectly usable.
///
/// # Examples
///
/// ```rust
/// use iniconf_core::Store;
///
/// let store = Store::parse_str("[server]\nport = 8080\n");
/// let server = store.section("server");
///
/// assert_eq!(server.get("port"), Some("8080"));
/// assert_eq!(server.get_as::<u16>("port"), Some(8080));
/// assert_eq!(server.get("missing"), None);
/// assert!(!store.section("nope").exists());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    store: &'a Store,
    name: &'a str,
}

impl<'a> SectionView<'a> {
    /// The section name this view is bound to.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns `true` iff the section exists in the store, even with zero
    /// keys.
    pub fn exists(&self) -> bool {
        self.store.contains_section(self.name)
    }

    /// Returns the stored value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.store.get(self.name, key)
    }

    /// Returns the value for `key` coerced to `T`; absence and coercion
    /// failure are both `None`.
    pub fn get_as<T: FromIni>(&self, key: &str) -> Option<T> {
        self.store.get_as(self.name, key)
    }

    /// Returns the coerced value, or `default` when absent or unparsable.
    pub fn get_or<T: FromIni>(&self, key: &str, default: T) -> T {
        self.store.get_or(self.name, key, default)
    }

    /// Key names in this section, in store order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.store.keys(self.name)
    }
}

/// Write-capable view of one section.
///
/// The first `set` through the view creates the section if necessary; until
/// then the store is untouched.
///
/// # Examples
///
/// ```rust
/// use iniconf_core::Store;
///
/// let mut store = Store::new();
/// let mut network = store.section_mut("network");
/// network.set("port", 24800);
/// network.set("bind", "0.0.0.0");
///
/// assert_eq!(store.get("network", "port"), Some("24800"));
/// ```
#[derive(Debug)]
pub struct SectionViewMut<'a> {
    store: &'a mut Store,
    name: String,
}

impl SectionViewMut<'_> {
    /// The section name this view is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.store.get(&self.name, key)
    }

    /// Stores `value` under `key`, creating the section on first use.
    pub fn set<V: fmt::Display>(&mut self, key: &str, value: V) {
        self.store.set(&self.name, key, value);
    }

    /// Removes `key`; returns `true` iff it existed.  The section itself is
    /// retained.
    pub fn remove(&mut self, key: &str) -> bool {
        self.store.remove_value(&self.name, key)
    }
}

impl Store {
    /// Returns a read-only view bound to `name`.
    pub fn section<'a>(&'a self, name: &'a str) -> SectionView<'a> {
        SectionView { store: self, name }
    }

    /// Returns a write-capable view bound to `name`.
    ///
    /// The section is created lazily, on the first `set` through the view —
    /// merely obtaining the view does not mutate the store.
    pub fn section_mut(&mut self, name: &str) -> SectionViewMut<'_> {
        SectionViewMut {
            store: self,
            name: name.to_string(),
        }
    }
}
