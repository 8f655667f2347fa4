//! Local persistence for the wardrobe.
//!
//! All items live in a single `SQLite` file under the storage root:
//!
//! ```text
//! <root>/
//!   wardrobe.sqlite   # one row per clothing item
//! ```
//!
//! Storage hands out snapshots. Nothing downstream holds a connection.

mod items;

use std::{env, fs, io, path::PathBuf};

use rusqlite::Connection;
use tracing::debug;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("item already exists: {0}")]
    ItemAlreadyExists(String),

    #[error("item has no id")]
    MissingId,

    #[error("corrupt wardrobe data: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS item (
    id          TEXT PRIMARY KEY NOT NULL,
    name        TEXT,
    category    TEXT NOT NULL,
    color       TEXT,
    material    TEXT,
    seasons     TEXT NOT NULL DEFAULT '',
    notes       TEXT,
    created_at  TEXT NOT NULL
);
";

/// Local file-based storage for clothing items.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory and database are created if they don't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let storage = Self { root };
        storage.open_db()?;
        debug!(path = %storage.db_path().display(), "storage ready");
        Ok(storage)
    }

    /// Returns the default storage root.
    ///
    /// `WARDROBE_HOME` wins when set and non-empty, otherwise `~/.wardrobe/`.
    pub fn default_root() -> Option<PathBuf> {
        if let Ok(home) = env::var("WARDROBE_HOME")
            && !home.is_empty()
        {
            return Some(PathBuf::from(home));
        }
        dirs::home_dir().map(|h| h.join(".wardrobe"))
    }

    fn db_path(&self) -> PathBuf {
        self.root.join("wardrobe.sqlite")
    }

    /// Opens the database, creating the schema on first use.
    fn open_db(&self) -> Result<Connection> {
        let conn = Connection::open(self.db_path())?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }
}
