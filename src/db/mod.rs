//! SQLite storage for user state

mod likes;
mod schema;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{debug, warn};

pub use schema::init_schema;

/// Handle to the local database
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        init_schema(&conn)?;
        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    /// Database that lives only for this process
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open `path`, falling back to memory so likes still work this session
    pub fn open_or_memory(path: &Path) -> Result<Self> {
        match Self::open(path) {
            Ok(db) => Ok(db),
            Err(e) => {
                warn!(error = %e, "likes will not be saved across restarts");
                Self::open_in_memory()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("skillsmp.db");
        Database::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_or_memory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be opened as a database file
        let db = Database::open_or_memory(dir.path());
        assert!(db.is_ok());
    }
}
