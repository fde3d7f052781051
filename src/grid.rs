//! Grid controller: filter state, debounced query and current page for one view

use std::time::Duration;

use tracing::debug;

use crate::catalog::Catalog;
use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::filter::{PageMarker, View, clamp_page, compute_view, pagination_items, total_pages};
use crate::navigation::PageCursor;

/// State behind the skills grid
#[derive(Debug)]
pub struct Grid<C: Clock = SystemClock> {
    catalog: Catalog,
    page_size: usize,
    /// What the user has typed so far
    raw_query: String,
    /// Query the view is computed from
    query: String,
    tag: Option<String>,
    current_page: usize,
    match_count: usize,
    total_pages: usize,
    /// Size of the last non-empty page, for loading placeholders
    last_visible_count: usize,
    debouncer: Debouncer<String, C>,
}

impl Grid<SystemClock> {
    pub fn new(catalog: Catalog, page_size: usize, quiet: Duration) -> Self {
        Self::with_clock(catalog, page_size, quiet, SystemClock)
    }
}

impl<C: Clock> Grid<C> {
    pub fn with_clock(catalog: Catalog, page_size: usize, quiet: Duration, clock: C) -> Self {
        let page_size = page_size.max(1);
        let mut grid = Self {
            catalog,
            page_size,
            raw_query: String::new(),
            query: String::new(),
            tag: None,
            current_page: 0,
            match_count: 0,
            total_pages: 1,
            last_visible_count: page_size,
            debouncer: Debouncer::with_clock(quiet, clock),
        };
        grid.refresh();
        grid
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Record a keystroke; the view follows once input has been quiet
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.raw_query = raw.into();
        self.debouncer.push(self.raw_query.clone());
    }

    pub fn push_char(&mut self, c: char) {
        let mut raw = std::mem::take(&mut self.raw_query);
        raw.push(c);
        self.set_query(raw);
    }

    pub fn pop_char(&mut self) {
        let mut raw = std::mem::take(&mut self.raw_query);
        raw.pop();
        self.set_query(raw);
    }

    /// Clear the search immediately, skipping the quiet period
    pub fn clear_query(&mut self) {
        self.raw_query.clear();
        self.debouncer.cancel();
        self.apply_query(String::new());
    }

    /// Apply a settled query if one is due. Returns true if the view changed.
    pub fn tick(&mut self) -> bool {
        match self.debouncer.poll() {
            Some(query) => self.apply_query(query),
            None => false,
        }
    }

    fn apply_query(&mut self, query: String) -> bool {
        if query == self.query {
            return false;
        }
        debug!(query = %query, "applying search query");
        self.query = query;
        self.current_page = 0;
        self.refresh();
        true
    }

    /// Set or clear the tag/category filter. Returns true if it changed.
    pub fn set_tag(&mut self, tag: Option<String>) -> bool {
        if tag == self.tag {
            return false;
        }
        debug!(tag = ?tag, "applying tag filter");
        self.tag = tag;
        self.current_page = 0;
        self.refresh();
        true
    }

    /// Select `tag`, or clear it if already selected
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tag.as_deref() == Some(tag) {
            self.set_tag(None)
        } else {
            self.set_tag(Some(tag.to_string()))
        }
    }

    /// True while typed input has not reached the view yet
    pub fn is_debouncing(&self) -> bool {
        self.raw_query != self.query
    }

    /// Number of loading placeholders to draw while debouncing
    pub fn placeholder_count(&self) -> usize {
        self.last_visible_count
    }

    /// The visible page
    pub fn view(&self) -> View<'_> {
        compute_view(
            self.catalog.skills(),
            &self.query,
            self.tag.as_deref(),
            self.current_page,
            self.page_size,
        )
    }

    pub fn pagination_items(&self) -> Vec<PageMarker> {
        pagination_items(self.current_page, self.total_pages)
    }

    /// Recompute counts after the filter or page changed
    fn refresh(&mut self) {
        let view = self.view();
        let (match_count, visible) = (view.match_count, view.items.len());

        self.match_count = match_count;
        self.total_pages = total_pages(match_count, self.page_size);
        self.current_page = self.current_page.min(self.total_pages - 1);
        if visible > 0 {
            self.last_visible_count = visible;
        }
    }
}

impl<C: Clock> PageCursor for Grid<C> {
    fn current_page(&self) -> usize {
        self.current_page
    }

    fn total_pages(&self) -> usize {
        self.total_pages
    }

    fn go_to_page(&mut self, page: i64) {
        let clamped = clamp_page(page, self.total_pages);
        if clamped != self.current_page {
            debug!(page = clamped, "changing page");
            self.current_page = clamped;
            self.refresh();
        }
    }
}
