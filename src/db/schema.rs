//! Database schema initialization and migrations

use anyhow::Result;
use rusqlite::Connection;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS likes (
            skill_id TEXT PRIMARY KEY,
            liked_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_likes_liked_at ON likes(liked_at);
        "#,
    )?;

    Ok(())
}
