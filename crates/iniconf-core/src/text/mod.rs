//! Text codec: the permissive INI reader, the canonical writer, and the
//! whitespace trimmer they share.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;
pub mod trim;
pub mod writer;

pub use reader::{parse_str_into, read_into};
pub use trim::trim;
pub use writer::write_from;

/// Errors that can occur while moving INI text between a store and the
/// outside world.
///
/// Malformed INI syntax is deliberately *not* represented here: the reader
/// discards lines it cannot interpret and keeps going.  The only failure
/// modes are real I/O failures and calling [`Store::write_back`] on a store
/// that has never been associated with a file.
///
/// [`Store::write_back`]: crate::Store::write_back
#[derive(Debug, Error)]
pub enum IniError {
    /// A named file could not be opened, created, read, or written.
    ///
    /// The underlying [`std::io::Error`] (and through it the platform error
    /// code) is preserved in the source chain.
    #[error("I/O error accessing {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A caller-supplied stream failed mid-read or mid-write.
    #[error("stream I/O failed: {0}")]
    Stream(#[from] io::Error),

    /// `write_back` was called on a store with no bound file path.
    #[error("store has no bound file path; load from or write to a named file first")]
    NoBoundPath,
}

impl IniError {
    /// Attaches a file path to a bare stream error.
    ///
    /// Used by the path-based adapters so that a read failure halfway through
    /// a file reports *which* file, not just the OS error.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            IniError::Stream(source) => IniError::File {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}
