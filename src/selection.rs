//! Liked and cart selections
//!
//! Likes are written through to a [`LikeStore`] on every toggle. Storage is
//! best effort: failures are logged and the in-memory set still changes.

use std::collections::HashSet;

use anyhow::Result;
use tracing::warn;

/// Persistent home of the liked set
pub trait LikeStore {
    fn get_likes(&self) -> Result<HashSet<String>>;

    fn save_like(&self, id: &str) -> Result<()>;

    fn remove_like(&self, id: &str) -> Result<()>;
}

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    Liked,
    Unliked,
}

/// Liked and cart membership for the current session
#[derive(Debug, Default, Clone)]
pub struct Selection {
    liked: HashSet<String>,
    cart: HashSet<String>,
}

impl Selection {
    /// Start with the stored likes; an unreadable store starts empty
    pub fn hydrate(store: &dyn LikeStore) -> Self {
        let liked = store.get_likes().unwrap_or_else(|e| {
            warn!(error = %e, "could not load likes, starting empty");
            HashSet::new()
        });
        Self {
            liked,
            cart: HashSet::new(),
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn in_cart(&self, id: &str) -> bool {
        self.cart.contains(id)
    }

    pub fn liked(&self) -> &HashSet<String> {
        &self.liked
    }

    pub fn cart(&self) -> &HashSet<String> {
        &self.cart
    }

    /// Flip the like on `id` and write the change through to `store`
    pub fn toggle_like(&mut self, id: &str, store: &dyn LikeStore) -> LikeChange {
        if self.liked.remove(id) {
            if let Err(e) = store.remove_like(id) {
                warn!(id, error = %e, "could not persist unlike");
            }
            LikeChange::Unliked
        } else {
            self.liked.insert(id.to_string());
            if let Err(e) = store.save_like(id) {
                warn!(id, error = %e, "could not persist like");
            }
            LikeChange::Liked
        }
    }

    /// Flip cart membership. Returns true if `id` is now in the cart.
    pub fn toggle_cart(&mut self, id: &str) -> bool {
        if self.cart.remove(id) {
            false
        } else {
            self.cart.insert(id.to_string());
            true
        }
    }
}
