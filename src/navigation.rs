//! Page navigation from keys and horizontal gestures
//!
//! The listener is created once per view and never stores the page it is
//! moving. Every event receives the grid through [`PageCursor`], so the
//! listener always sees the current page and page count.

use crossterm::event::KeyCode;
use tracing::trace;

/// Minimum horizontal travel for a drag to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 50;

/// Read/write access to the current page of a view
pub trait PageCursor {
    fn current_page(&self) -> usize;

    fn total_pages(&self) -> usize;

    /// Move to `page`, clamped into range
    fn go_to_page(&mut self, page: i64);

    fn next_page(&mut self) {
        let current = self.current_page() as i64;
        self.go_to_page(current + 1);
    }

    fn prev_page(&mut self) {
        let current = self.current_page() as i64;
        self.go_to_page(current - 1);
    }
}

/// Where keyboard focus currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    TextInput,
}

/// Direction a handled event moved the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Prev,
    Next,
}

/// Translates arrow keys and swipes into page changes
#[derive(Debug, Clone)]
pub struct NavigationListener {
    swipe_threshold: u16,
    touch_start_x: Option<u16>,
}

impl Default for NavigationListener {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl NavigationListener {
    pub fn new(swipe_threshold: u16) -> Self {
        Self {
            swipe_threshold,
            touch_start_x: None,
        }
    }

    /// Handle a key press. Arrows are ignored while a text input has focus.
    pub fn on_key(
        &mut self,
        cursor: &mut dyn PageCursor,
        code: KeyCode,
        focus: Focus,
    ) -> Option<PageStep> {
        if focus == Focus::TextInput {
            return None;
        }
        let step = match code {
            KeyCode::Left => PageStep::Prev,
            KeyCode::Right => PageStep::Next,
            _ => return None,
        };
        Some(apply(cursor, step))
    }

    pub fn on_touch_start(&mut self, x: u16) {
        self.touch_start_x = Some(x);
    }

    /// Finish a drag. Moving left past the threshold goes forward.
    pub fn on_touch_end(&mut self, cursor: &mut dyn PageCursor, x: u16) -> Option<PageStep> {
        let start = self.touch_start_x.take()?;
        let diff = i32::from(start) - i32::from(x);
        if diff.unsigned_abs() <= u32::from(self.swipe_threshold) {
            trace!(diff, "drag below swipe threshold");
            return None;
        }
        let step = if diff > 0 {
            PageStep::Next
        } else {
            PageStep::Prev
        };
        Some(apply(cursor, step))
    }

    /// Horizontal wheel scroll pages immediately
    pub fn on_scroll(&mut self, cursor: &mut dyn PageCursor, step: PageStep) -> PageStep {
        apply(cursor, step)
    }
}

fn apply(cursor: &mut dyn PageCursor, step: PageStep) -> PageStep {
    match step {
        PageStep::Prev => cursor.prev_page(),
        PageStep::Next => cursor.next_page(),
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::clamp_page;

    struct Pages {
        current: usize,
        total: usize,
    }

    impl PageCursor for Pages {
        fn current_page(&self) -> usize {
            self.current
        }

        fn total_pages(&self) -> usize {
            self.total
        }

        fn go_to_page(&mut self, page: i64) {
            self.current = clamp_page(page, self.total);
        }
    }

    #[test]
    fn test_arrows_move_pages() {
        let mut pages = Pages {
            current: 1,
            total: 3,
        };
        let mut nav = NavigationListener::default();

        assert_eq!(
            nav.on_key(&mut pages, KeyCode::Right, Focus::Grid),
            Some(PageStep::Next)
        );
        assert_eq!(pages.current, 2);

        // clamped at the last page
        nav.on_key(&mut pages, KeyCode::Right, Focus::Grid);
        assert_eq!(pages.current, 2);

        nav.on_key(&mut pages, KeyCode::Left, Focus::Grid);
        nav.on_key(&mut pages, KeyCode::Left, Focus::Grid);
        nav.on_key(&mut pages, KeyCode::Left, Focus::Grid);
        assert_eq!(pages.current, 0);
    }

    #[test]
    fn test_arrows_ignored_in_text_input() {
        let mut pages = Pages {
            current: 0,
            total: 3,
        };
        let mut nav = NavigationListener::default();

        assert_eq!(
            nav.on_key(&mut pages, KeyCode::Right, Focus::TextInput),
            None
        );
        assert_eq!(nav.on_key(&mut pages, KeyCode::Char('x'), Focus::Grid), None);
        assert_eq!(pages.current, 0);
    }

    #[test]
    fn test_listener_sees_latest_page_count() {
        let mut pages = Pages {
            current: 0,
            total: 1,
        };
        let mut nav = NavigationListener::default();

        nav.on_key(&mut pages, KeyCode::Right, Focus::Grid);
        assert_eq!(pages.current, 0);

        // page count grows after a filter change; same listener
        pages.total = 4;
        nav.on_key(&mut pages, KeyCode::Right, Focus::Grid);
        assert_eq!(pages.current, 1);
    }

    #[test]
    fn test_swipe_threshold() {
        let mut pages = Pages {
            current: 1,
            total: 3,
        };
        let mut nav = NavigationListener::new(50);

        nav.on_touch_start(100);
        assert_eq!(nav.on_touch_end(&mut pages, 50), None);
        assert_eq!(pages.current, 1);

        nav.on_touch_start(100);
        assert_eq!(nav.on_touch_end(&mut pages, 49), Some(PageStep::Next));
        assert_eq!(pages.current, 2);

        nav.on_touch_start(10);
        assert_eq!(nav.on_touch_end(&mut pages, 200), Some(PageStep::Prev));
        assert_eq!(pages.current, 1);
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let mut pages = Pages {
            current: 0,
            total: 3,
        };
        let mut nav = NavigationListener::new(5);
        assert_eq!(nav.on_touch_end(&mut pages, 0), None);

        nav.on_touch_start(100);
        nav.on_touch_end(&mut pages, 0);
        // start is consumed by the first end
        assert_eq!(nav.on_touch_end(&mut pages, 0), None);
        assert_eq!(pages.current, 1);
    }
}
