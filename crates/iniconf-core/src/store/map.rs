//! The in-memory configuration store.
//!
//! # Data model
//!
//! A [`Store`] is an ordered map from section name to an ordered map from
//! key name to string value.  Everything is stored as text: `set` converts
//! its argument to canonical text immediately, and typed interpretation
//! happens only at read time through [`FromIni`].
//!
//! Iteration order — and therefore serialization and enumeration order — is
//! lexicographic by the byte order of the UTF-8 names (a `BTreeMap` on both
//! levels).  This order is part of the observable contract and is covered by
//! tests; do not swap the map type without revisiting the writer tests.
//!
//! # Value semantics
//!
//! `Store` is a plain value: `clone()` is a deep copy and two stores never
//! share backing storage.  Equality compares section data only — the bound
//! file path is provenance, not data.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::FromIni;

/// Ordered mapping `section name → (key name → value)` with typed read
/// access and a remembered file path for write-back.
///
/// Absence is a normal outcome everywhere: reads of missing sections or keys
/// return `None`/`false`/empty iterators, never a panic.  The empty string
/// is a legal section name and a legal key name.
///
/// # Examples
///
/// ```rust
/// use iniconf_core::Store;
///
/// let mut store = Store::new();
/// store.set("database", "port", 5432);
/// store.set("database", "host", "localhost");
///
/// assert_eq!(store.get("database", "host"), Some("localhost"));
/// assert_eq!(store.get_as::<u16>("database", "port"), Some(5432));
/// assert_eq!(store.get("database", "missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Section data.  `BTreeMap` on both levels: enumeration and
    /// serialization order must be deterministic.
    sections: BTreeMap<String, BTreeMap<String, String>>,
    /// Default target for [`Store::write_back`]; set by the path-based
    /// load/write operations.
    pub(crate) bound_path: Option<PathBuf>,
}

impl Store {
    /// Creates an empty store with no bound file path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value if both `section` and `key` exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Returns the stored value coerced to `T`.
    ///
    /// Absence and coercion failure are both `None`; callers that need to
    /// distinguish the two can [`Store::get`] the raw text first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniconf_core::Store;
    ///
    /// let store = Store::parse_str("[s]\nn = 123\nb = True\nbad = 123abc\n");
    /// assert_eq!(store.get_as::<i32>("s", "n"), Some(123));
    /// assert_eq!(store.get_as::<bool>("s", "b"), Some(true));
    /// assert_eq!(store.get_as::<i32>("s", "bad"), None);
    /// assert_eq!(store.get_as::<i32>("s", "missing"), None);
    /// ```
    pub fn get_as<T: FromIni>(&self, section: &str, key: &str) -> Option<T> {
        T::from_ini(self.get(section, key)?)
    }

    /// Returns the coerced value, or `default` when absent or unparsable.
    pub fn get_or<T: FromIni>(&self, section: &str, key: &str, default: T) -> T {
        self.get_as(section, key).unwrap_or(default)
    }

    /// Stores `value` under `section`/`key`, creating the section if needed.
    ///
    /// The value is converted to its canonical text form immediately:
    /// integers as base-10 digits, floats via Rust's default formatting,
    /// bools as `true`/`false`.  Names are stored exactly as given — the
    /// parser trims, programmatic writes do not.
    pub fn set<V: fmt::Display>(&mut self, section: &str, key: &str, value: V) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Ensures that `section` exists.
    ///
    /// A no-op when the section is already present — existing keys are never
    /// cleared by this call.
    pub fn set_section(&mut self, name: &str) {
        self.sections.entry(name.to_string()).or_default();
    }

    /// Removes one key from a section.
    ///
    /// Returns `true` iff the key existed.  The section itself is retained
    /// even if it just lost its last key.
    pub fn remove_value(&mut self, section: &str, key: &str) -> bool {
        self.sections
            .get_mut(section)
            .is_some_and(|entries| entries.remove(key).is_some())
    }

    /// Removes a section and all keys under it.
    ///
    /// Returns `true` iff the section existed.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.sections.remove(name).is_some()
    }

    /// All section names, in store order.  Zero-key sections are included.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// All key names under `section`, in store order.
    ///
    /// An absent section and an empty section both yield an empty iterator;
    /// use [`Store::contains_section`] when that distinction matters.
    pub fn keys(&self, section: &str) -> impl Iterator<Item = &str> {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// Returns `true` iff `section` exists, even with zero keys.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns `true` iff the store holds no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Drops all sections.  The bound file path is left untouched; the
    /// replace-loading operations reset it themselves where required.
    pub(crate) fn clear(&mut self) {
        self.sections.clear();
    }

    /// Raw access for the writer.
    pub(crate) fn sections_map(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.sections
    }
}

/// Data-only equality: two stores are equal iff their sections, keys, and
/// values match.  The bound file path does not participate.
impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Store {}

/// Serializes as the bare nested map `{section: {key: value}}`.
///
/// The bound file path is provenance and is not serialized.
impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let sections = BTreeMap::deserialize(deserializer)?;
        Ok(Store {
            sections,
            bound_path: None,
        })
    }
}
