//! Catalog browsing commands

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use crate::catalog::{Catalog, POPULAR_TAG_COUNT, SOCIAL_PROOF};
use crate::db::Database;
use crate::filter::{
    PageMarker, clamp_page, compute_view, filter_skills, pagination_items, total_pages,
};
use crate::selection::LikeStore;

/// Render the compact page index, 1-based, current page in brackets
pub fn format_page_index(items: &[PageMarker], current: usize) -> String {
    items
        .iter()
        .map(|item| match item {
            PageMarker::Page(p) if *p == current => format!("[{}]", p + 1),
            PageMarker::Page(p) => (p + 1).to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a 1-based `--page` argument onto a page index, clamped like `go_to_page`
pub fn page_from_arg(page: i64, total_pages: usize) -> usize {
    clamp_page(page.saturating_sub(1), total_pages)
}

/// Print one page of the filtered catalog
pub fn cmd_list(
    catalog: &Catalog,
    db: &Database,
    query: &str,
    tag: Option<&str>,
    page: i64,
    page_size: usize,
) -> Result<()> {
    let matches = filter_skills(catalog.skills(), query, tag).len();
    let page = page_from_arg(page, total_pages(matches, page_size));
    let view = compute_view(catalog.skills(), query, tag, page, page_size);
    let liked = db.get_likes().unwrap_or_default();

    if view.items.is_empty() {
        println!("{}", "No skills found".yellow());
        if !query.is_empty() {
            let clear = match tag {
                Some(tag) => format!("skillsmp list -t \"{}\"", tag),
                None => "skillsmp list".to_string(),
            };
            println!("  No results for \"{}\". Clear the search: {}", query, clear.cyan());
            let terms: Vec<String> = catalog.search_suggestions(query)
                .iter()
                .map(|t| format!("-q {}", t))
                .collect();
            if !terms.is_empty() {
                println!("  Try searching: {}", terms.join("  ").cyan());
            }
        }
        if let Some(tag) = tag {
            let show_all = if query.is_empty() {
                "skillsmp list".to_string()
            } else {
                format!("skillsmp list -q \"{}\"", query)
            };
            println!("  Nothing tagged {}. Show all: {}", tag, show_all.cyan());
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "Skill", "Category", "Tags", "★", "♥"]);

    for skill in &view.items {
        table.add_row(vec![
            skill.icon.clone(),
            format!("{}\n{}", skill.name, skill.id),
            skill.category.to_string(),
            skill.tags.join(", "),
            skill.popularity.to_string(),
            if liked.contains(&skill.id) { "♥" } else { "" }.to_string(),
        ]);
    }

    println!("{}", table);
    println!(
        "{} {} skill{}  page {} / {}",
        ">".cyan(),
        view.match_count,
        if view.match_count == 1 { "" } else { "s" },
        view.current_page + 1,
        view.total_pages
    );
    if view.total_pages > 1 {
        let index = pagination_items(view.current_page, view.total_pages);
        println!("  {}", format_page_index(&index, view.current_page).dimmed());
    }

    Ok(())
}

/// Show full details of one skill
pub fn cmd_show(catalog: &Catalog, db: &Database, id: &str) -> Result<()> {
    let skill = catalog
        .get(id)
        .context(format!("Skill '{}' not found", id))?;
    let liked = db.is_liked(id).unwrap_or(false);

    println!("{} {}", skill.icon, skill.name.bold());
    println!("  {}", skill.description);
    println!();
    println!("  {:<10} {}", "id".dimmed(), skill.id);
    println!("  {:<10} {}", "category".dimmed(), skill.category.to_string().cyan());
    if !skill.tags.is_empty() {
        let tags: Vec<String> = skill
            .tags
            .iter()
            .map(|t| format!("#{}", t.to_lowercase()))
            .collect();
        println!("  {:<10} {}", "tags".dimmed(), tags.join(" "));
    }
    println!("  {:<10} {}", "stars".dimmed(), skill.popularity);
    println!("  {:<10} {}", "repo".dimmed(), skill.repo_url());
    println!("  {:<10} {}", "install".dimmed(), skill.install_command.green());
    if liked {
        println!("  {}", "♥ liked".magenta());
    }

    Ok(())
}

/// Category bar with counts
pub fn cmd_categories(catalog: &Catalog) -> Result<()> {
    println!("{}", "Categories".bold());
    println!("  {:<16} {}", "All Skills", catalog.len());
    for entry in catalog.category_counts() {
        println!(
            "  {} {:<13} {}",
            entry.category.icon(),
            entry.category.name(),
            entry.count.to_string().cyan()
        );
    }
    Ok(())
}

/// Most used tags
pub fn cmd_tags(catalog: &Catalog, limit: Option<usize>) -> Result<()> {
    let tags = catalog.popular_tags(limit.unwrap_or(POPULAR_TAG_COUNT));
    if tags.is_empty() {
        println!("No tags");
        return Ok(());
    }
    let line: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
    println!("{}", line.join("  ").cyan());
    Ok(())
}

/// Landing stats: totals, category chart and recent activity
pub fn cmd_stats(catalog: &Catalog) -> Result<()> {
    println!("{}", "SkillsMP".bold());
    println!(
        "  {} skills across {} categories",
        catalog.len().to_string().cyan(),
        crate::models::Category::all().len().to_string().cyan()
    );
    println!();

    for bar in catalog.category_chart() {
        let width = (bar.pct as usize) / 5;
        println!(
            "  {:<13} {}",
            bar.category.name(),
            "█".repeat(width.max(1)).green()
        );
    }
    println!();

    println!("{}", "Used by leading autonomous systems and frameworks.".dimmed());
    for (time, user, cmd) in SOCIAL_PROOF {
        println!("  {} {} $ {}", time.dimmed(), user.cyan(), cmd);
    }
    Ok(())
}

/// Print the install command for a skill
pub fn cmd_run(catalog: &Catalog, id: &str) -> Result<()> {
    let skill = catalog
        .get(id)
        .context(format!("Skill '{}' not found", id))?;
    println!("{}", skill.install_command);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_page_index() {
        let items = pagination_items(10, 20);
        assert_eq!(format_page_index(&items, 10), "1 … 10 [11] 12 … 20");

        let items = pagination_items(0, 3);
        assert_eq!(format_page_index(&items, 0), "[1] 2 3");
    }

    #[test]
    fn test_show_unknown_skill_is_error() {
        let catalog = Catalog::bundled().unwrap();
        let db = Database::open_in_memory().unwrap();
        let err = cmd_show(&catalog, &db, "no-such-skill").unwrap_err();
        assert!(err.to_string().contains("no-such-skill"));
        assert!(cmd_run(&catalog, "no-such-skill").is_err());
    }

    #[test]
    fn test_page_argument_is_one_based_and_clamped() {
        assert_eq!(page_from_arg(1, 3), 0);
        assert_eq!(page_from_arg(2, 3), 1);
        assert_eq!(page_from_arg(3, 3), 2);
        assert_eq!(page_from_arg(999, 3), 2);
        assert_eq!(page_from_arg(0, 3), 0);
        assert_eq!(page_from_arg(-4, 3), 0);
        assert_eq!(page_from_arg(i64::MIN, 3), 0);
        assert_eq!(page_from_arg(i64::MAX, 3), 2);
        assert_eq!(page_from_arg(5, 1), 0);
    }

    #[test]
    fn test_list_handles_out_of_range_and_empty() {
        let catalog = Catalog::bundled().unwrap();
        let db = Database::open_in_memory().unwrap();
        cmd_list(&catalog, &db, "", None, 999, 12).unwrap();
        cmd_list(&catalog, &db, "zzzz", Some("Tools"), 1, 12).unwrap();
    }
}
