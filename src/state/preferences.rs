use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Key of the schedule image shown on the schedule screen
pub const SCHEDULE_IMAGE_KEY: &str = "gameScheduleImage";
/// Key of the last game's score summary (written, never read back)
pub const LAST_GAME_SCORE_KEY: &str = "LastGameScore";
/// Key of the next game announcement (written, never read back)
pub const NEXT_GAME_KEY: &str = "NextGame";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to create preference directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Persistent key-value storage for string preferences.
///
/// A missing key is a normal result (`None`), not a failure. Reads never
/// fail loudly: implementations log storage errors and report `None`.
pub trait PreferenceStore {
    /// Most recently set value for `key`, or `None` if never set (or cleared)
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Clear `key`; removing an unknown key is not an error
    fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}

/// Handle to the store shared by every view-model of the app
pub type SharedPreferences = Rc<dyn PreferenceStore>;

/// Preferences backed by a SQLite database file.
pub struct SqlitePreferenceStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqlitePreferenceStore {
    /// Open (or create) the preference database at `db_path`.
    ///
    /// Parent directories are created as needed and the schema is
    /// initialized if the file is new.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferenceError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "preference database opened");

        let store = Self { conn, db_path };
        store.init_schema()?;
        Ok(store)
    }

    /// Non-durable store, mostly useful in tests
    pub fn open_in_memory() -> Result<Self, PreferenceError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn,
            db_path: PathBuf::from(":memory:"),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), PreferenceError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL,
                updated_at      INTEGER NOT NULL
            )",
            [],
        )?;

        tracing::debug!("preference schema initialized");
        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn try_get(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read preference");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Utc::now().timestamp()],
        )?;
        tracing::debug!(key, "preference saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.conn.execute("DELETE FROM preferences WHERE key = ?1", [key])?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for SqlitePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlitePreferenceStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// Process-local preferences. Used in tests and when the database
/// cannot be opened at startup.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
