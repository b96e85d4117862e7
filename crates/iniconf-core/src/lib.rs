//! # iniconf-core
//!
//! In-memory INI configuration store: a permissive line-oriented parser, an
//! ordered section/key/value map, typed value coercion, and a serializer
//! that renders the store back to a canonical text layout.
//!
//! This crate is the shared foundation used by the `iniconf` command-line
//! tool.  It has zero dependencies on the filesystem layout of any particular
//! application: callers hand it text (from a file, a socket, or an in-memory
//! buffer) and get back a [`Store`] they can query and mutate.
//!
//! # Architecture overview
//!
//! - **`text`** – How characters travel to and from disk.  The reader
//!   consumes a stream line by line, filling a store; the writer emits the
//!   canonical `[section]` / `key = value` layout other tools can rely on
//!   byte-for-byte.
//!
//! - **`store`** – The data structure itself: an ordered map from section
//!   name to an ordered map of keys to string values, plus the accessor
//!   objects that bind reads/writes to a single section.
//!
//! - **`value`** – Typed coercion at the read boundary.  Everything is
//!   stored as text; [`FromIni`] converts it to integers, floats, and
//!   booleans on demand.
//!
//! # Example
//!
//! ```rust
//! use iniconf_core::Store;
//!
//! let mut store = Store::parse_str("[server]\nport = 8080\nverbose = true\n");
//! assert_eq!(store.get("server", "port"), Some("8080"));
//! assert_eq!(store.get_as::<u16>("server", "port"), Some(8080));
//! assert_eq!(store.get_as::<bool>("server", "verbose"), Some(true));
//!
//! store.set("server", "port", 9090);
//! assert_eq!(store.to_string(), "[server]\nport = 9090\nverbose = true\n\n");
//! ```

pub mod store;
pub mod text;
pub mod value;

mod file;

// Re-export the most-used items at the crate root so callers can write
// `iniconf_core::Store` instead of `iniconf_core::store::map::Store`.
pub use store::map::Store;
pub use store::view::{SectionView, SectionViewMut};
pub use text::reader::{parse_str_into, read_into};
pub use text::trim::trim;
pub use text::writer::write_from;
pub use text::IniError;
pub use value::FromIni;
