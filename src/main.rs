use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::{debug, warn};

use skillsmp::commands::{
    cmd_categories, cmd_config_init, cmd_config_path, cmd_config_show, cmd_like, cmd_likes,
    cmd_list, cmd_run, cmd_show, cmd_stats, cmd_tags,
};
use skillsmp::logging::{init_file_logging, init_logging};
use skillsmp::{Catalog, Database, SkillsConfig};

#[derive(Parser)]
#[command(name = "skillsmp")]
#[command(about = "Browse, search and run a curated catalog of AI agent skills")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Browse,

    /// Print one page of matching skills
    List {
        /// Case-insensitive text matched against name, description and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Exact tag or category name
        #[arg(short, long)]
        tag: Option<String>,

        /// Page number (1-based, clamped to the last page)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// Show details for a skill
    Show {
        /// Skill id
        id: String,
    },

    /// List categories with skill counts
    Categories,

    /// List the most used tags
    Tags {
        /// How many tags to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Catalog overview
    Stats,

    /// Print the install command for a skill
    Run {
        /// Skill id
        id: String,
    },

    /// Like or unlike a skill
    Like {
        /// Skill id
        id: String,
    },

    /// List liked skills
    Likes,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print config, database and log file locations
    Path,
    /// Write a default config.toml if none exists
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SkillsConfig::load()?;
    let command = cli.command.unwrap_or(Commands::Browse);

    // The browser owns the terminal, so its logs go to a file
    match command {
        Commands::Browse => init_file_logging(&config.log.level, &SkillsConfig::log_path()?)?,
        _ => init_logging(&config.log.level)?,
    }

    let catalog = Catalog::bundled()?;
    debug!(skills = catalog.len(), "catalog loaded");

    match command {
        Commands::Browse => {
            let db = open_db(&catalog)?;
            skillsmp::tui::run(catalog, &db, &config)
        }
        Commands::List { query, tag, page } => cmd_list(
            &catalog,
            &open_db(&catalog)?,
            &query,
            tag.as_deref(),
            page,
            config.grid.page_size,
        ),
        Commands::Show { id } => cmd_show(&catalog, &open_db(&catalog)?, &id),
        Commands::Categories => cmd_categories(&catalog),
        Commands::Tags { limit } => cmd_tags(&catalog, limit),
        Commands::Stats => cmd_stats(&catalog),
        Commands::Run { id } => cmd_run(&catalog, &id),
        Commands::Like { id } => cmd_like(&catalog, &open_db(&catalog)?, &id),
        Commands::Likes => cmd_likes(&catalog, &open_db(&catalog)?),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cmd_config_show(&config),
            ConfigCommands::Path => cmd_config_path(),
            ConfigCommands::Init => cmd_config_init(&SkillsConfig::config_path()?),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "skillsmp", &mut io::stdout());
            Ok(())
        }
    }
}

/// Likes database, falling back to memory when the data dir is unusable.
/// Likes for skills that left the catalog are dropped.
fn open_db(catalog: &Catalog) -> Result<Database> {
    let db = Database::open_or_memory(&SkillsConfig::db_path()?)?;
    match db.prune_likes(&catalog.ids()) {
        Ok(0) => {}
        Ok(pruned) => debug!(pruned, "dropped likes for unknown skills"),
        Err(e) => warn!(error = %e, "could not prune stale likes"),
    }
    Ok(db)
}
