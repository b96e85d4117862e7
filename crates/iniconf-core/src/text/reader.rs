//! Line-oriented INI reader.
//!
//! The reader is deliberately permissive: anything it cannot interpret is
//! discarded and parsing continues.  This matches how hand-edited config
//! files behave in practice — a stray line must not take the whole file
//! down with it.  The complete discard policy:
//!
//! - blank lines and `;`/`#` comment lines are skipped;
//! - a line with no `=` that is not a section header is dropped;
//! - a `key = value` line before any section header is dropped (it has no
//!   section to attach to);
//! - a line whose key trims to nothing is dropped.
//!
//! The only errors a parse can produce are genuine stream read failures.
//! End of stream is success, even when no line was meaningful.

use std::io::BufRead;

use tracing::trace;

use crate::store::map::Store;
use crate::text::trim::trim;
use crate::text::IniError;

/// Per-parse state: which section subsequent `key = value` lines belong to.
///
/// Each call to [`read_into`] / [`parse_str_into`] starts a fresh parser, so
/// key-value lines at the top of a merged stream are orphans again even if
/// the store already has sections.
pub(crate) struct LineParser {
    current_section: Option<String>,
}

impl LineParser {
    pub(crate) fn new() -> Self {
        Self {
            current_section: None,
        }
    }

    /// Interprets one raw line and applies it to `store`.
    pub(crate) fn feed(&mut self, store: &mut Store, raw: &str) {
        let line = trim(raw);

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            return;
        }

        if line.starts_with('[') && line.ends_with(']') {
            // Both brackets matched, so the line is at least 2 bytes and the
            // slice below is in bounds.  `[]` (or whitespace between the
            // brackets) names the empty-string section, which is valid and
            // distinct from "no section opened yet".
            let name = trim(&line[1..line.len() - 1]);
            // Register the section immediately so that a header with no keys
            // under it still shows up in enumeration.
            store.set_section(name);
            self.current_section = Some(name.to_string());
            return;
        }

        // Split on the *first* '='; any further '=' belongs to the value.
        let Some(delimiter) = line.find('=') else {
            trace!("discarding line without '=': {line:?}");
            return;
        };
        let Some(section) = self.current_section.as_deref() else {
            trace!("discarding key-value pair before any section header: {line:?}");
            return;
        };

        let key = trim(&line[..delimiter]);
        if key.is_empty() {
            trace!("discarding line with empty key: {line:?}");
            return;
        }
        let value = trim(&line[delimiter + 1..]);
        store.set(section, key, value);
    }
}

/// Reads INI text from `reader` line by line, merging the result into
/// `store`.
///
/// Existing store contents are kept; parsed keys overwrite colliding ones.
/// Use [`Store::load_reader`] for replace-all semantics, or
/// [`Store::from_reader`] to build a fresh store.
///
/// # Errors
///
/// Returns [`IniError::Stream`] if the underlying reader fails mid-parse.
/// Running out of input is success, not an error.
pub fn read_into<R: BufRead>(reader: R, store: &mut Store) -> Result<(), IniError> {
    let mut parser = LineParser::new();
    for line in reader.lines() {
        let line = line?;
        parser.feed(store, &line);
    }
    Ok(())
}

/// Merges INI text from an in-memory string into `store`.
///
/// Infallible: a `&str` has no read-failure mode, and malformed lines are
/// discarded rather than reported.
pub fn parse_str_into(text: &str, store: &mut Store) {
    let mut parser = LineParser::new();
    for line in text.lines() {
        parser.feed(store, line);
    }
}

impl Store {
    /// Builds a fresh store by parsing `reader` to exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Stream`] if the reader fails mid-parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::io::Cursor;
    /// use iniconf_core::Store;
    ///
    /// let store = Store::from_reader(Cursor::new("[a]\nk = v\n")).unwrap();
    /// assert_eq!(store.get("a", "k"), Some("v"));
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IniError> {
        let mut store = Store::new();
        read_into(reader, &mut store)?;
        Ok(store)
    }

    /// Builds a fresh store from an in-memory string.  Infallible.
    pub fn parse_str(text: &str) -> Self {
        let mut store = Store::new();
        parse_str_into(text, &mut store);
        store
    }

    /// Replaces all store contents with the result of parsing `reader`.
    ///
    /// Clears the data *and* the bound file path before parsing, so a
    /// subsequent [`Store::write_back`] will fail until a path is bound
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Stream`] if the reader fails mid-parse.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<(), IniError> {
        self.clear();
        self.bound_path = None;
        read_into(reader, self)
    }

    /// Merges parsed data from `reader` over the existing contents.
    ///
    /// Existing sections and keys survive; colliding keys take the new
    /// value.  The bound file path is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Stream`] if the reader fails mid-parse.
    pub fn merge_reader<R: BufRead>(&mut self, reader: R) -> Result<(), IniError> {
        read_into(reader, self)
    }

    /// Merges parsed data from an in-memory string over the existing
    /// contents.  Infallible.
    pub fn merge_str(&mut self, text: &str) {
        parse_str_into(text, self);
    }
}
