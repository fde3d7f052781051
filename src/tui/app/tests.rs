//! Tests for the TUI application module

use std::time::Duration;

use super::*;
use crate::db::Database;
use crate::debounce::test_clock::ManualClock;

fn instant_config() -> SkillsConfig {
    let mut config = SkillsConfig::default();
    config.grid.debounce_ms = 0;
    config.grid.swipe_threshold = 10;
    config
}

fn app_with(config: &SkillsConfig, db: &Database) -> App {
    App::new(Catalog::bundled().unwrap(), db, config)
}

fn type_query(app: &mut App, query: &str) {
    app.enter_search();
    for c in query.chars() {
        app.search_push(c);
    }
    app.tick();
}

#[test]
fn test_initial_state() {
    let db = Database::open_in_memory().unwrap();
    let app = app_with(&instant_config(), &db);

    assert!(app.running);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.grid.total_pages(), 3);
    assert_eq!(app.visible_len(), 12);
    assert_eq!(app.popular_tags.len(), POPULAR_TAG_COUNT);

    // most popular skill first
    let top = app.selected_skill().unwrap();
    let max = app
        .grid
        .catalog()
        .skills()
        .iter()
        .map(|s| s.popularity)
        .max()
        .unwrap();
    assert_eq!(top.popularity, max);
}

#[test]
fn test_search_waits_for_quiet_period() {
    let db = Database::open_in_memory().unwrap();
    let clock = ManualClock::new();
    let mut app = App::with_clock(
        Catalog::bundled().unwrap(),
        &db,
        &SkillsConfig::default(),
        clock.clone(),
    );

    app.enter_search();
    for c in "pdf".chars() {
        app.search_push(c);
    }
    clock.advance(Duration::from_millis(299));
    app.tick();
    assert!(app.grid.is_debouncing());
    assert_eq!(app.grid.query(), "");
    // nothing is selectable while the placeholder grid shows
    assert!(app.selected_skill().is_none());
    assert_eq!(app.grid.placeholder_count(), 12);

    clock.advance(Duration::from_millis(1));
    app.tick();
    assert!(!app.grid.is_debouncing());
    assert_eq!(app.grid.query(), "pdf");
    assert_eq!(app.selected_skill().unwrap().id, "pdf-toolkit");
}

#[test]
fn test_search_applies_and_resets_page() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    app.go_to_page(2);
    assert_eq!(app.grid.current_page(), 2);

    type_query(&mut app, "PDF");
    assert_eq!(app.grid.query(), "PDF");
    assert_eq!(app.grid.current_page(), 0);
    assert_eq!(app.selected_skill().unwrap().id, "pdf-toolkit");

    app.clear_search();
    assert_eq!(app.grid.match_count(), 36);
}

#[test]
fn test_arrow_keys_page_only_outside_search() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);

    app.select_last();
    app.page_key(KeyCode::Right);
    assert_eq!(app.grid.current_page(), 1);
    assert_eq!(app.selected_index, 0);

    app.enter_search();
    app.page_key(KeyCode::Right);
    assert_eq!(app.grid.current_page(), 1);

    app.exit_search();
    app.page_key(KeyCode::Right);
    app.page_key(KeyCode::Right);
    assert_eq!(app.grid.current_page(), 2);
    assert_eq!(app.visible_len(), 12);

    app.page_key(KeyCode::Left);
    assert_eq!(app.grid.current_page(), 1);
}

#[test]
fn test_drag_swipes_pages() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);

    app.drag_start(40);
    app.drag_end(35);
    assert_eq!(app.grid.current_page(), 0);

    app.drag_start(40);
    app.drag_end(5);
    assert_eq!(app.grid.current_page(), 1);

    app.drag_start(5);
    app.drag_end(60);
    assert_eq!(app.grid.current_page(), 0);

    app.scroll_page(PageStep::Next);
    assert_eq!(app.grid.current_page(), 1);
}

#[test]
fn test_cycle_category_wraps_to_all() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    let categories = app.grid.catalog().category_counts();

    app.go_to_page(1);
    app.cycle_category();
    assert_eq!(app.grid.tag(), Some(categories[0].category.name()));
    assert_eq!(app.grid.current_page(), 0);
    assert_eq!(app.grid.match_count(), categories[0].count);

    for _ in 1..categories.len() {
        app.cycle_category();
    }
    assert_eq!(
        app.grid.tag(),
        Some(categories[categories.len() - 1].category.name())
    );

    app.cycle_category();
    assert_eq!(app.grid.tag(), None);
}

#[test]
fn test_popular_tag_then_clear() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);

    app.cycle_popular_tag();
    let tag = app.popular_tags[0].clone();
    assert_eq!(app.grid.tag(), Some(tag.as_str()));
    for skill in app.grid.view().items {
        assert!(skill.tags.contains(&tag) || skill.category.name() == tag);
    }

    app.clear_tag();
    assert_eq!(app.grid.tag(), None);
}

#[test]
fn test_toggle_like_persists() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    let id = app.selected_skill().unwrap().id.clone();

    app.toggle_like(&db);
    assert!(app.selection.is_liked(&id));
    assert!(db.is_liked(&id).unwrap());
    let status = app.status_message.as_ref().unwrap();
    assert!(status.text.starts_with("Liked"));
    assert!(!status.is_error);

    app.toggle_like(&db);
    assert!(!app.selection.is_liked(&id));
    assert!(!db.is_liked(&id).unwrap());
    assert_eq!(db.list_likes().unwrap().len(), 0);
}

#[test]
fn test_likes_hydrate_from_store() {
    let db = Database::open_in_memory().unwrap();
    db.save_like("doc-writer").unwrap();
    let app = app_with(&instant_config(), &db);
    assert!(app.selection.is_liked("doc-writer"));
}

#[test]
fn test_toggle_cart_and_run() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    let skill = app.selected_skill().unwrap().clone();

    app.toggle_cart();
    assert!(app.selection.in_cart(&skill.id));
    app.toggle_cart();
    assert!(!app.selection.in_cart(&skill.id));

    app.run_selected();
    let status = app.status_message.as_ref().unwrap();
    assert!(status.text.contains(&skill.install_command));

    app.open_docs();
    let status = app.status_message.as_ref().unwrap();
    assert!(status.text.contains(&skill.repo_url()));
}

#[test]
fn test_card_cursor_clamps_to_page() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);

    app.go_to_page(99);
    assert_eq!(app.grid.current_page(), 2);
    for _ in 0..20 {
        app.select_next();
    }
    assert_eq!(app.selected_index, 11);
    app.select_first();
    assert_eq!(app.selected_index, 0);
    app.select_prev();
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_details_popup_needs_selection() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);

    app.open_details_popup();
    assert!(app.show_details_popup);
    app.close_details_popup();

    type_query(&mut app, "no skill is called this");
    app.exit_search();
    app.open_details_popup();
    assert!(!app.show_details_popup);
}

#[test]
fn test_select_category_toggles() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    let categories = app.grid.catalog().category_counts();

    app.go_to_page(1);
    app.select_category(1);
    assert_eq!(app.grid.tag(), Some(categories[1].category.name()));
    assert_eq!(app.grid.current_page(), 0);

    // cycling continues from the picked category
    app.cycle_category();
    assert_eq!(app.grid.tag(), Some(categories[2].category.name()));

    app.select_category(2);
    assert_eq!(app.grid.tag(), None);

    app.select_category(99);
    assert_eq!(app.grid.tag(), None);
}

#[test]
fn test_suggestions_only_for_empty_search() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    assert!(app.suggestions().is_empty());

    type_query(&mut app, "zzzz");
    assert_eq!(app.grid.match_count(), 0);
    assert_eq!(app.suggestions(), app.popular_tags);

    app.next_suggestion();
    assert_eq!(app.suggestion_index, 1);
    app.apply_suggestion();
    app.tick();
    assert_eq!(app.grid.query(), app.popular_tags[1]);
    assert!(app.grid.match_count() > 0);
    assert_eq!(app.suggestion_index, 0);
    assert!(app.suggestions().is_empty());
}

#[test]
fn test_empty_tag_filter_has_no_suggestions() {
    let db = Database::open_in_memory().unwrap();
    let mut app = app_with(&instant_config(), &db);
    app.grid.set_tag(Some("no-such-tag".to_string()));
    assert_eq!(app.grid.match_count(), 0);
    assert!(app.suggestions().is_empty());
}
