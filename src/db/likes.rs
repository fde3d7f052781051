//! Liked skill persistence

use std::collections::HashSet;

use anyhow::Result;
use chrono::Utc;
use rusqlite::params;

use super::Database;
use crate::selection::LikeStore;

impl Database {
    // ==================== Likes ====================

    /// Liked skill ids, oldest like first
    pub fn list_likes(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT skill_id FROM likes ORDER BY liked_at, skill_id")?;

        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    /// Check if a skill is liked
    pub fn is_liked(&self, skill_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM likes WHERE skill_id = ?1",
            [skill_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Drop likes for ids no longer in the catalog
    pub fn prune_likes(&self, known: &HashSet<&str>) -> Result<usize> {
        let stale: Vec<String> = self
            .list_likes()?
            .into_iter()
            .filter(|id| !known.contains(id.as_str()))
            .collect();

        let tx = self.conn.unchecked_transaction()?;
        for id in &stale {
            tx.execute("DELETE FROM likes WHERE skill_id = ?1", [id])?;
        }
        tx.commit()?;

        Ok(stale.len())
    }
}

impl LikeStore for Database {
    fn get_likes(&self) -> Result<HashSet<String>> {
        Ok(self.list_likes()?.into_iter().collect())
    }

    fn save_like(&self, id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO likes (skill_id, liked_at) VALUES (?1, ?2)",
            params![id, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove_like(&self, id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM likes WHERE skill_id = ?1", [id])?;
        Ok(())
    }
}
