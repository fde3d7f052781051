//! Traits for list navigation behavior
//!
//! `SelectableList` moves the card cursor within the visible page.

/// Trait for navigable list state
///
/// Provides default implementations for common navigation operations
/// (next, prev, first, last) based on the list length and current selection.
pub trait SelectableList {
    /// Returns the number of items currently visible
    fn visible_len(&self) -> usize;

    /// Returns the currently selected index
    fn selected_index(&self) -> usize;

    /// Sets the selected index
    fn set_selected_index(&mut self, idx: usize);

    /// Move selection to the next item (clamped to last item)
    fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            let new_idx = (self.selected_index() + 1).min(len - 1);
            self.set_selected_index(new_idx);
        }
    }

    /// Move selection to the previous item (clamped to first item)
    fn select_prev(&mut self) {
        let new_idx = self.selected_index().saturating_sub(1);
        self.set_selected_index(new_idx);
    }

    /// Move selection to the first item
    fn select_first(&mut self) {
        self.set_selected_index(0);
    }

    /// Move selection to the last item
    fn select_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.set_selected_index(len - 1);
        }
    }
}
