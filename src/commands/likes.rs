//! Like commands

use anyhow::{Context, Result};
use colored::Colorize;

use crate::catalog::Catalog;
use crate::db::Database;
use crate::selection::{LikeChange, Selection};

/// Toggle the like on a skill
pub fn cmd_like(catalog: &Catalog, db: &Database, id: &str) -> Result<()> {
    let skill = catalog
        .get(id)
        .context(format!("Skill '{}' not found", id))?;

    let mut selection = Selection::hydrate(db);
    match selection.toggle_like(&skill.id, db) {
        LikeChange::Liked => println!("{} Liked {}", "✓".green(), skill.name.cyan()),
        LikeChange::Unliked => println!("{} Unliked {}", "✓".green(), skill.name.cyan()),
    }

    Ok(())
}

/// List liked skills, oldest like first
pub fn cmd_likes(catalog: &Catalog, db: &Database) -> Result<()> {
    let ids = db.list_likes()?;
    if ids.is_empty() {
        println!("No liked skills yet. Try {}", "skillsmp like <id>".cyan());
        return Ok(());
    }

    println!("{}", "Liked skills".bold());
    for id in &ids {
        match catalog.get(id) {
            Some(skill) => println!("  {} {} {}", skill.icon, skill.name, id.dimmed()),
            None => println!("  {} {}", "?".yellow(), id.dimmed()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_toggles_in_db() {
        let catalog = Catalog::bundled().unwrap();
        let db = Database::open_in_memory().unwrap();
        let id = catalog.skills()[0].id.clone();

        cmd_like(&catalog, &db, &id).unwrap();
        assert!(db.is_liked(&id).unwrap());
        cmd_likes(&catalog, &db).unwrap();

        cmd_like(&catalog, &db, &id).unwrap();
        assert!(!db.is_liked(&id).unwrap());
    }

    #[test]
    fn test_like_unknown_skill_writes_nothing() {
        let catalog = Catalog::bundled().unwrap();
        let db = Database::open_in_memory().unwrap();
        assert!(cmd_like(&catalog, &db, "nope").is_err());
        assert!(db.list_likes().unwrap().is_empty());
    }
}
