//! Application state for the TUI

mod traits;

#[cfg(test)]
mod tests;

pub use traits::SelectableList;

use crossterm::event::KeyCode;

use crate::catalog::{Catalog, POPULAR_TAG_COUNT};
use crate::config::SkillsConfig;
use crate::debounce::{Clock, SystemClock};
use crate::grid::Grid;
use crate::models::Skill;
use crate::navigation::{Focus, NavigationListener, PageCursor, PageStep};
use crate::selection::{LikeChange, LikeStore, Selection};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Status message to display temporarily
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App<C: Clock = SystemClock> {
    pub running: bool,
    pub input_mode: InputMode,
    pub grid: Grid<C>,
    pub selection: Selection,
    nav: NavigationListener,

    // Card cursor within the visible page
    pub selected_index: usize,

    // Quick filter cycling
    pub popular_tags: Vec<String>,
    category_cursor: Option<usize>,
    tag_cursor: Option<usize>,

    // Highlighted "try searching" term in the empty state
    pub suggestion_index: usize,

    // UI state
    pub show_help: bool,
    pub show_details_popup: bool,
    pub status_message: Option<StatusMessage>,
}

impl<C: Clock> SelectableList for App<C> {
    fn visible_len(&self) -> usize {
        if self.grid.is_debouncing() {
            0
        } else {
            self.grid.view().items.len()
        }
    }

    fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn set_selected_index(&mut self, idx: usize) {
        self.selected_index = idx;
    }
}

impl App {
    pub fn new(catalog: Catalog, store: &dyn LikeStore, config: &SkillsConfig) -> Self {
        Self::with_clock(catalog, store, config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(
        catalog: Catalog,
        store: &dyn LikeStore,
        config: &SkillsConfig,
        clock: C,
    ) -> Self {
        let popular_tags = catalog.popular_tags(POPULAR_TAG_COUNT);
        let grid = Grid::with_clock(
            catalog,
            config.grid.page_size,
            config.grid.debounce(),
            clock,
        );

        Self {
            running: true,
            input_mode: InputMode::Normal,
            grid,
            selection: Selection::hydrate(store),
            nav: NavigationListener::new(config.grid.swipe_threshold),
            selected_index: 0,
            popular_tags,
            category_cursor: None,
            tag_cursor: None,
            suggestion_index: 0,
            show_help: false,
            show_details_popup: false,
            status_message: None,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Where keyboard input goes
    pub fn focus(&self) -> Focus {
        match self.input_mode {
            InputMode::Search => Focus::TextInput,
            InputMode::Normal => Focus::Grid,
        }
    }

    /// Apply a settled search query, if any
    pub fn tick(&mut self) {
        if self.grid.tick() {
            self.selected_index = 0;
            self.suggestion_index = 0;
        }
    }

    // ==================== Search ====================

    /// Enter search mode, keeping the current query for editing
    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    /// Exit search mode
    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push(&mut self, c: char) {
        self.grid.push_char(c);
    }

    pub fn search_pop(&mut self) {
        self.grid.pop_char();
    }

    /// Clear search and show all skills
    pub fn clear_search(&mut self) {
        if !self.grid.raw_query().is_empty() {
            self.grid.clear_query();
            self.selected_index = 0;
        }
    }

    // ==================== Tag / category filter ====================

    /// Step through categories; wraps back to "all"
    pub fn cycle_category(&mut self) {
        let categories = self.grid.catalog().category_counts();
        let next = next_cursor(self.category_cursor, categories.len());
        self.category_cursor = next;
        self.tag_cursor = None;
        let tag = next.map(|i| categories[i].category.name().to_string());
        self.apply_tag(tag);
    }

    /// Step through the popular tags; wraps back to "all"
    pub fn cycle_popular_tag(&mut self) {
        let next = next_cursor(self.tag_cursor, self.popular_tags.len());
        self.tag_cursor = next;
        self.category_cursor = None;
        let tag = next.map(|i| self.popular_tags[i].clone());
        self.apply_tag(tag);
    }

    /// Pick a category from the bar; picking the active one clears it
    pub fn select_category(&mut self, index: usize) {
        let categories = self.grid.catalog().category_counts();
        let Some(entry) = categories.get(index) else {
            return;
        };
        self.tag_cursor = None;
        if self.grid.toggle_tag(entry.category.name()) {
            self.selected_index = 0;
        }
        self.category_cursor = self.grid.tag().map(|_| index);
    }

    pub fn clear_tag(&mut self) {
        self.category_cursor = None;
        self.tag_cursor = None;
        self.apply_tag(None);
    }

    fn apply_tag(&mut self, tag: Option<String>) {
        if self.grid.set_tag(tag) {
            self.selected_index = 0;
        }
    }

    // ==================== Empty state ====================

    /// Search terms offered when the settled query matched nothing
    pub fn suggestions(&self) -> Vec<String> {
        if self.grid.is_debouncing() || self.grid.match_count() > 0 {
            return Vec::new();
        }
        self.grid.catalog().search_suggestions(self.grid.query())
    }

    /// Highlight the next suggestion
    pub fn next_suggestion(&mut self) {
        let count = self.suggestions().len();
        if count > 0 {
            self.suggestion_index = (self.suggestion_index + 1) % count;
        }
    }

    /// Search for the highlighted suggestion
    pub fn apply_suggestion(&mut self) {
        let suggestions = self.suggestions();
        let Some(term) = suggestions.get(self.suggestion_index) else {
            return;
        };
        self.grid.set_query(term.clone());
        self.suggestion_index = 0;
        self.selected_index = 0;
    }

    // ==================== Paging ====================

    /// Arrow keys page the grid unless a text input has focus
    pub fn page_key(&mut self, code: KeyCode) {
        let focus = self.focus();
        if self.nav.on_key(&mut self.grid, code, focus).is_some() {
            self.selected_index = 0;
        }
    }

    pub fn go_to_page(&mut self, page: i64) {
        let before = self.grid.current_page();
        self.grid.go_to_page(page);
        if self.grid.current_page() != before {
            self.selected_index = 0;
        }
    }

    pub fn drag_start(&mut self, column: u16) {
        self.nav.on_touch_start(column);
    }

    pub fn drag_end(&mut self, column: u16) {
        if self.nav.on_touch_end(&mut self.grid, column).is_some() {
            self.selected_index = 0;
        }
    }

    pub fn scroll_page(&mut self, step: PageStep) {
        let before = self.grid.current_page();
        self.nav.on_scroll(&mut self.grid, step);
        if self.grid.current_page() != before {
            self.selected_index = 0;
        }
    }

    // ==================== Cards ====================

    /// Skill under the card cursor
    pub fn selected_skill(&self) -> Option<&Skill> {
        if self.grid.is_debouncing() {
            return None;
        }
        self.grid.view().items.get(self.selected_index).copied()
    }

    fn selected_id_and_name(&self) -> Option<(String, String)> {
        self.selected_skill()
            .map(|s| (s.id.clone(), s.name.clone()))
    }

    /// Toggle like on the selected skill and write it through to `store`
    pub fn toggle_like(&mut self, store: &dyn LikeStore) {
        let Some((id, name)) = self.selected_id_and_name() else {
            return;
        };
        match self.selection.toggle_like(&id, store) {
            LikeChange::Liked => self.set_status(format!("Liked {name}"), false),
            LikeChange::Unliked => self.clear_status(),
        }
    }

    /// Toggle the selected skill in the bag
    pub fn toggle_cart(&mut self) {
        let Some((id, name)) = self.selected_id_and_name() else {
            return;
        };
        if self.selection.toggle_cart(&id) {
            self.set_status(format!("Added {name} to bag"), false);
        } else {
            self.set_status(format!("Removed {name} from bag"), false);
        }
    }

    /// Hand the selected skill's install command back to the user
    pub fn run_selected(&mut self) {
        if let Some(cmd) = self.selected_skill().map(|s| s.install_command.clone()) {
            self.set_status(format!("$ {cmd}"), false);
        }
    }

    /// Point the user at the selected skill's docs
    pub fn open_docs(&mut self) {
        if let Some(url) = self.selected_skill().map(|s| s.repo_url()) {
            self.set_status(format!("Docs: {url}"), false);
        }
    }

    pub fn open_details_popup(&mut self) {
        if self.selected_skill().is_some() {
            self.show_details_popup = true;
        }
    }

    pub fn close_details_popup(&mut self) {
        self.show_details_popup = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ==================== Status ====================

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// None -> 0 -> 1 -> ... -> len-1 -> None
fn next_cursor(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        None if len > 0 => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        _ => None,
    }
}
