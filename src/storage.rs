//! Local persistence for scan history.
//!
//! One `SQLite` file under the storage root:
//!
//! ```text
//! <root>/history.sqlite    # scan table: one row per recorded scan
//! ```

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

mod history;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("history entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("history entry already exists: {0}")]
    EntryAlreadyExists(Uuid),

    #[error("malformed row for entry {id}: {reason}")]
    MalformedRow { id: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local `SQLite`-backed storage for scan history.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens storage rooted at the given directory.
    ///
    /// The directory and database are created if they don't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let conn = Connection::open(root.join("history.sqlite"))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS scan (
                 id         TEXT PRIMARY KEY,
                 value      TEXT NOT NULL,
                 kind       TEXT NOT NULL,
                 symbology  TEXT NOT NULL,
                 scanned_at TEXT NOT NULL,
                 favorite   INTEGER NOT NULL DEFAULT 0
             );",
        )?;
        Ok(Self { conn })
    }

    /// Returns the default storage root: `~/.glyph/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".glyph"))
    }
}
