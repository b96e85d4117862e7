//! Canonical INI writer.
//!
//! Output layout, byte for byte:
//!
//! ```text
//! [section_name]\n
//! key = value\n
//! \n
//! ```
//!
//! One header line per section, one `key = value` line per key (single
//! spaces around the `=`), one blank separator line after every section —
//! including sections with zero keys.  Sections and keys are emitted in
//! store order (lexicographic).  This exact layout is the interoperability
//! baseline: other tools parse files produced here, so it must not drift.
//!
//! Parsing the writer's output reproduces the store exactly — the padding
//! around `=` is trimmed away again by the reader.

use std::fmt;
use std::io::Write;

use crate::store::map::Store;
use crate::text::IniError;

impl fmt::Display for Store {
    /// Formats the store in the canonical INI layout.
    ///
    /// `store.to_string()` is therefore the canonical serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (section, entries) in self.sections_map() {
            writeln!(f, "[{section}]")?;
            for (key, value) in entries {
                writeln!(f, "{key} = {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Streams the canonical INI text for `store` into `writer` and flushes.
///
/// # Errors
///
/// Returns [`IniError::Stream`] if the writer fails mid-write or on the
/// final flush — output is never silently truncated.
pub fn write_from<W: Write>(store: &Store, mut writer: W) -> Result<(), IniError> {
    write!(writer, "{store}")?;
    writer.flush()?;
    Ok(())
}

impl Store {
    /// Streams the canonical INI text into `writer` and flushes.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Stream`] if the writer fails mid-write or on
    /// flush.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), IniError> {
        write_from(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;

    #[test]
    fn test_canonical_layout() {
        // Arrange
        let mut store = Store::new();
        store.set("section1", "key1", "value1");
        store.set("section1", "key2", "value2");
        store.set("section2", "key3", "value3");

        // Act / Assert – exact bytes, including the trailing blank lines
        assert_eq!(
            store.to_string(),
            "[section1]\nkey1 = value1\nkey2 = value2\n\n[section2]\nkey3 = value3\n\n"
        );
    }

    #[test]
    fn test_empty_store_serializes_to_nothing() {
        assert_eq!(Store::new().to_string(), "");
    }

    #[test]
    fn test_zero_key_section_still_emits_header_and_separator() {
        let mut store = Store::new();
        store.set_section("empty");

        assert_eq!(store.to_string(), "[empty]\n\n");
    }

    #[test]
    fn test_empty_section_and_key_names_are_emitted() {
        let mut store = Store::new();
        store.set("", "", "v");

        assert_eq!(store.to_string(), "[]\n = v\n\n");
    }

    #[test]
    fn test_values_containing_equals_are_written_verbatim() {
        let mut store = Store::new();
        store.set("s", "conn", "host=db;port=5432");

        assert_eq!(store.to_string(), "[s]\nconn = host=db;port=5432\n\n");
    }

    #[test]
    fn test_write_to_matches_display() {
        let mut store = Store::new();
        store.set("a", "x", "1");
        store.set_section("b");

        let mut buf = Vec::new();
        store.write_to(&mut buf).expect("write must succeed");

        assert_eq!(String::from_utf8(buf).unwrap(), store.to_string());
    }

    /// A writer that fails after accepting a fixed number of bytes.
    struct FailingWriter {
        remaining: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "simulated write failure",
                ));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces_as_error() {
        let mut store = Store::new();
        store.set("s", "k", "v");

        let result = store.write_to(FailingWriter { remaining: 0 });

        assert!(matches!(result, Err(IniError::Stream(_))));
    }

    #[test]
    fn test_mid_write_failure_surfaces_as_error() {
        let mut store = Store::new();
        store.set("s", "k", "v");

        // Accepts the section header, then fails on the key line.
        let result = store.write_to(FailingWriter { remaining: 4 });

        assert!(matches!(result, Err(IniError::Stream(_))));
    }
}
