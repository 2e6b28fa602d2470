//! Per-category "was the last page seen" flags.
//!
//! Prices are only trustworthy once the final page of every donation
//! category has been shown at least once, since undonated items spread over
//! all pages and the list can only sort what it has seen.

use std::collections::BTreeMap;
use tracing::debug;

/// Category whose pages only list already donated items.
pub const SPECIAL_ITEMS: &str = "Special Items";

/// Donation categories tracked for completeness.
pub const DONATION_CATEGORIES: [&str; 3] = ["Weapons", "Armor Sets", "Rarities"];

/// category -> has its highest page been visited?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPages {
    pages: BTreeMap<String, bool>,
}

impl Default for CheckedPages {
    fn default() -> Self {
        let mut pages = BTreeMap::new();
        // Nothing to gather there, so it never holds the banner back.
        pages.insert(SPECIAL_ITEMS.to_string(), true);
        for category in DONATION_CATEGORIES {
            pages.insert(category.to_string(), false);
        }
        Self { pages }
    }
}

impl CheckedPages {
    /// Every category unvisited except Special Items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `category`'s last page is on screen.
    ///
    /// Returns `true` when this flipped a flag. Unknown categories are ignored.
    pub fn mark_last_page_visited(&mut self, category: &str) -> bool {
        match self.pages.get_mut(category) {
            Some(visited) if !*visited => {
                *visited = true;
                debug!(category, "Last page visited");
                true
            }
            Some(_) => false,
            None => {
                debug!(category, "Ignoring untracked museum category");
                false
            }
        }
    }

    /// Flag for `category`, or `None` if it is not tracked.
    pub fn has_visited_last_page(&self, category: &str) -> Option<bool> {
        self.pages.get(category).copied()
    }

    /// True once no tracked category is still unvisited.
    pub fn visited_all(&self) -> bool {
        self.pages.values().all(|visited| *visited)
    }

    /// Every tracked category with its flag.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.pages.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
