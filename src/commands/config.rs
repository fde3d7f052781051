//! Config inspection commands

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::config::SkillsConfig;

/// Print the effective configuration as TOML
pub fn cmd_config_show(config: &SkillsConfig) -> Result<()> {
    if !SkillsConfig::exists() {
        println!("{}", "# no config file, showing defaults".dimmed());
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Print where config, database and logs live
pub fn cmd_config_path() -> Result<()> {
    println!("{:<8} {}", "config".cyan(), SkillsConfig::config_path()?.display());
    println!("{:<8} {}", "data".cyan(), SkillsConfig::db_path()?.display());
    println!("{:<8} {}", "log".cyan(), SkillsConfig::log_path()?.display());
    Ok(())
}

/// Write the default config to `path`, leaving an existing file alone
pub fn cmd_config_init(path: &Path) -> Result<()> {
    if path.exists() {
        println!("{} Config already exists at {}", "!".yellow(), path.display());
        return Ok(());
    }
    SkillsConfig::default().save_to(path)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        cmd_config_init(&path).unwrap();
        assert_eq!(SkillsConfig::load_from(&path).unwrap(), SkillsConfig::default());

        std::fs::write(&path, "[grid]\npage_size = 6\n").unwrap();
        cmd_config_init(&path).unwrap();
        assert_eq!(SkillsConfig::load_from(&path).unwrap().grid.page_size, 6);
    }
}
