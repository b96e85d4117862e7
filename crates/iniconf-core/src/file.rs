//! File-path adapters over the stream-based core.
//!
//! These are thin: open a file, wrap it in a buffered reader/writer, and
//! delegate to [`read_into`]/[`write_from`].  The store remembers the last
//! path it was loaded from or written to, so [`Store::write_back`] can
//! persist changes without the caller threading the path around.
//!
//! [`read_into`]: crate::text::reader::read_into
//! [`write_from`]: crate::text::writer::write_from

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use crate::store::map::Store;
use crate::text::reader::read_into;
use crate::text::writer::write_from;
use crate::text::IniError;

fn open_error(path: &Path, source: std::io::Error) -> IniError {
    IniError::File {
        path: path.to_path_buf(),
        source,
    }
}

impl Store {
    /// Builds a fresh store by parsing the file at `path`, binding the path
    /// for later [`Store::write_back`].
    ///
    /// # Errors
    ///
    /// Returns [`IniError::File`] if the file cannot be opened or fails
    /// mid-read.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use iniconf_core::Store;
    ///
    /// let store = Store::from_path("app.ini")?;
    /// let port = store.get_or("server", "port", 8080u16);
    /// # Ok::<(), iniconf_core::IniError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IniError> {
        let mut store = Store::new();
        store.load_path(path)?;
        Ok(store)
    }

    /// Replaces all store contents with the parsed contents of `path` and
    /// binds the path.
    ///
    /// On an open failure the store is left untouched; existing data is only
    /// cleared once the file is actually open.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::File`] if the file cannot be opened or fails
    /// mid-read.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), IniError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| open_error(path, source))?;

        self.clear();
        read_into(BufReader::new(file), self).map_err(|err| err.with_path(path))?;
        self.bound_path = Some(path.to_path_buf());

        debug!(
            "loaded {} section(s) from {}",
            self.sections().count(),
            path.display()
        );
        Ok(())
    }

    /// Merges the parsed contents of `path` over the existing data.
    ///
    /// Existing sections and keys survive; colliding keys take the file's
    /// value.  The bound path is left untouched — merging in an overlay file
    /// does not change where [`Store::write_back`] writes.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::File`] if the file cannot be opened or fails
    /// mid-read.
    pub fn merge_path(&mut self, path: impl AsRef<Path>) -> Result<(), IniError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| open_error(path, source))?;

        read_into(BufReader::new(file), self).map_err(|err| err.with_path(path))?;

        debug!("merged {}", path.display());
        Ok(())
    }

    /// Writes the canonical INI text to `path` and binds the path, so a
    /// later [`Store::write_back`] targets the same file.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::File`] if the file cannot be created or fails
    /// mid-write.
    pub fn write_path(&mut self, path: impl AsRef<Path>) -> Result<(), IniError> {
        let path = path.as_ref();
        self.write_path_impl(path)?;
        self.bound_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Writes the canonical INI text back to the bound path.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::NoBoundPath`] if the store was never loaded from
    /// or written to a named file, and [`IniError::File`] on I/O failure.
    pub fn write_back(&self) -> Result<(), IniError> {
        let path = self.bound_path.clone().ok_or(IniError::NoBoundPath)?;
        self.write_path_impl(&path)
    }

    /// The path used by [`Store::write_back`], if any.
    pub fn bound_path(&self) -> Option<&Path> {
        self.bound_path.as_deref()
    }

    fn write_path_impl(&self, path: &Path) -> Result<(), IniError> {
        let file = File::create(path).map_err(|source| open_error(path, source))?;
        write_from(self, BufWriter::new(file)).map_err(|err| err.with_path(path))?;

        debug!(
            "wrote {} section(s) to {}",
            self.sections().count(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    use super::*;

    /// Unique scratch path under the OS temp dir; removed by `TempFile::drop`.
    struct TempFile {
        path: PathBuf,
    }

    impl TempFile {
        fn new(name: &str) -> Self {
            let mut path = std::env::temp_dir();
            path.push(format!("iniconf-test-{}-{name}", std::process::id()));
            Self { path }
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn test_write_path_then_from_path_round_trips() {
        // Arrange
        let tmp = TempFile::new("roundtrip.ini");
        let mut original = Store::new();
        original.set("server", "port", 8080);
        original.set("server", "host", "localhost");
        original.set_section("empty");

        // Act
        original.write_path(&tmp.path).expect("write must succeed");
        let reloaded = Store::from_path(&tmp.path).expect("load must succeed");

        // Assert
        assert_eq!(reloaded, original);
        assert!(reloaded.contains_section("empty"));
    }

    #[test]
    fn test_from_path_binds_the_path() {
        let tmp = TempFile::new("bind.ini");
        fs::write(&tmp.path, "[s]\nk = v\n").unwrap();

        let store = Store::from_path(&tmp.path).expect("load must succeed");

        assert_eq!(store.bound_path(), Some(tmp.path.as_path()));
    }

    #[test]
    fn test_write_path_binds_the_path_for_write_back() {
        let tmp = TempFile::new("writeback.ini");
        let mut store = Store::new();
        store.set("s", "k", "v");
        store.write_path(&tmp.path).expect("write must succeed");

        store.set("s", "k", "updated");
        store.write_back().expect("write back must succeed");

        let reloaded = Store::from_path(&tmp.path).unwrap();
        assert_eq!(reloaded.get("s", "k"), Some("updated"));
    }

    #[test]
    fn test_write_back_without_bound_path_is_a_usage_error() {
        let store = Store::new();

        let result = store.write_back();

        assert!(matches!(result, Err(IniError::NoBoundPath)));
    }

    #[test]
    fn test_load_reader_clears_the_bound_path() {
        let tmp = TempFile::new("unbind.ini");
        fs::write(&tmp.path, "[s]\nk = v\n").unwrap();
        let mut store = Store::from_path(&tmp.path).unwrap();

        store.load_reader(Cursor::new("[t]\nx = y\n")).unwrap();

        assert_eq!(store.bound_path(), None);
        assert!(matches!(store.write_back(), Err(IniError::NoBoundPath)));
    }

    #[test]
    fn test_merge_path_keeps_data_and_binding() {
        let base = TempFile::new("merge-base.ini");
        let overlay = TempFile::new("merge-overlay.ini");
        fs::write(&base.path, "[a]\nk1 = v1\n").unwrap();
        fs::write(&overlay.path, "[b]\nk2 = v2\n").unwrap();

        let mut store = Store::from_path(&base.path).unwrap();
        store.merge_path(&overlay.path).expect("merge must succeed");

        assert_eq!(store.get("a", "k1"), Some("v1"));
        assert_eq!(store.get("b", "k2"), Some("v2"));
        // Still bound to the base file, not the overlay.
        assert_eq!(store.bound_path(), Some(base.path.as_path()));
    }

    #[test]
    fn test_open_failure_reports_the_path() {
        let missing = TempFile::new("does-not-exist.ini");

        let result = Store::from_path(&missing.path);

        match result {
            Err(IniError::File { path, source }) => {
                assert_eq!(path, missing.path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected IniError::File, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_load_leaves_existing_data_intact() {
        let missing = TempFile::new("also-missing.ini");
        let mut store = Store::new();
        store.set("keep", "k", "v");

        let result = store.load_path(&missing.path);

        assert!(result.is_err());
        assert_eq!(store.get("keep", "k"), Some("v"));
    }
}
