//! Event handling for the TUI

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;

use super::app::{App, InputMode, SelectableList};
use crate::navigation::PageStep;
use crate::selection::LikeStore;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle all input events
pub fn handle_events(app: &mut App, store: &dyn LikeStore) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key, store),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {} // Terminal will redraw automatically
            _ => {}
        }
    }
    Ok(())
}

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent, store: &dyn LikeStore) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    if app.show_details_popup {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_details_popup(),
            KeyCode::Char('f') => app.toggle_like(store),
            KeyCode::Char('b') => app.toggle_cart(),
            KeyCode::Char('r') => app.run_selected(),
            KeyCode::Char('o') => app.open_docs(),
            _ => {}
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key, store),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent, store: &dyn LikeStore) {
    // Status lingers until the next key
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Search focus (Ctrl+K like the web search box)
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => app.enter_search(),

        // Paging
        KeyCode::Left | KeyCode::Right => app.page_key(key.code),
        KeyCode::Char('h') => app.page_key(KeyCode::Left),
        KeyCode::Char('l') => app.page_key(KeyCode::Right),

        // Card cursor - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Filters
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('0') => app.clear_tag(),
        KeyCode::Char(d @ '1'..='9') => app.select_category(d as usize - '1' as usize),
        KeyCode::Char('t') => app.cycle_popular_tag(),
        KeyCode::Char('x') => app.clear_tag(),
        KeyCode::Esc => {
            if app.grid.raw_query().is_empty() {
                app.clear_tag();
            } else {
                app.clear_search();
            }
        }

        // Empty state suggestions
        KeyCode::Tab => app.next_suggestion(),
        KeyCode::Char('s') => app.apply_suggestion(),

        // Card actions
        KeyCode::Enter => app.open_details_popup(),
        KeyCode::Char('f') => app.toggle_like(store),
        KeyCode::Char('b') => app.toggle_cart(),
        KeyCode::Char('r') => app.run_selected(),
        KeyCode::Char('o') => app.open_docs(),

        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => app.exit_search(),
        KeyCode::Backspace => app.search_pop(),
        // Arrows belong to the text input here
        KeyCode::Left | KeyCode::Right => app.page_key(key.code),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: crossterm::event::MouseEvent) {
    // Don't handle mouse during overlays
    if app.show_help || app.show_details_popup {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.drag_start(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.drag_end(mouse.column),
        MouseEventKind::ScrollLeft => app.scroll_page(PageStep::Prev),
        MouseEventKind::ScrollRight => app.scroll_page(PageStep::Next),
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SkillsConfig;
    use crate::db::Database;
    use crate::navigation::PageCursor;

    fn press(app: &mut App, db: &Database, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), db);
    }

    fn app(db: &Database) -> App {
        let mut config = SkillsConfig::default();
        config.grid.debounce_ms = 0;
        App::new(Catalog::bundled().unwrap(), db, &config)
    }

    #[test]
    fn test_typed_letters_do_not_trigger_shortcuts_in_search() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);

        press(&mut app, &db, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);
        for c in "qfl".chars() {
            press(&mut app, &db, KeyCode::Char(c));
        }
        assert!(app.running);
        assert_eq!(app.grid.raw_query(), "qfl");
        assert!(db.list_likes().unwrap().is_empty());

        press(&mut app, &db, KeyCode::Right);
        assert_eq!(app.grid.current_page(), 0);

        press(&mut app, &db, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_ctrl_k_focuses_search() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
            &db,
        );
        assert_eq!(app.input_mode, InputMode::Search);
    }

    #[test]
    fn test_vim_paging_keys() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);
        press(&mut app, &db, KeyCode::Char('l'));
        press(&mut app, &db, KeyCode::Char('l'));
        assert_eq!(app.grid.current_page(), 2);
        press(&mut app, &db, KeyCode::Char('h'));
        assert_eq!(app.grid.current_page(), 1);
    }

    #[test]
    fn test_escape_clears_search_then_tag() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);

        press(&mut app, &db, KeyCode::Char('c'));
        press(&mut app, &db, KeyCode::Char('/'));
        press(&mut app, &db, KeyCode::Char('e'));
        press(&mut app, &db, KeyCode::Enter);
        assert!(app.grid.tag().is_some());

        press(&mut app, &db, KeyCode::Esc);
        assert!(app.grid.raw_query().is_empty());
        assert!(app.grid.tag().is_some());

        press(&mut app, &db, KeyCode::Esc);
        assert!(app.grid.tag().is_none());
    }

    #[test]
    fn test_digit_picks_category_and_again_clears() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);
        let first = app.grid.catalog().category_counts()[0].category.name();

        press(&mut app, &db, KeyCode::Char('1'));
        assert_eq!(app.grid.tag(), Some(first));
        press(&mut app, &db, KeyCode::Char('1'));
        assert_eq!(app.grid.tag(), None);

        press(&mut app, &db, KeyCode::Char('2'));
        assert!(app.grid.tag().is_some());
        press(&mut app, &db, KeyCode::Char('0'));
        assert_eq!(app.grid.tag(), None);
    }

    #[test]
    fn test_suggestion_keys_search_from_empty_state() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);

        press(&mut app, &db, KeyCode::Char('/'));
        for c in "zzzz".chars() {
            press(&mut app, &db, KeyCode::Char(c));
        }
        press(&mut app, &db, KeyCode::Enter);
        app.tick();
        assert_eq!(app.grid.match_count(), 0);

        press(&mut app, &db, KeyCode::Tab);
        press(&mut app, &db, KeyCode::Char('s'));
        app.tick();
        assert_eq!(app.grid.query(), app.popular_tags[1]);
        assert!(app.grid.match_count() > 0);
        assert_eq!(app.grid.tag(), None);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let db = Database::open_in_memory().unwrap();
        let mut app = app(&db);

        press(&mut app, &db, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, &db, KeyCode::Right);
        assert_eq!(app.grid.current_page(), 0);
        press(&mut app, &db, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, &db, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
