//! Cheapest-undonated-item tracking for one museum session.
//!
//! Every redraw hands over the visible slots. When they differ from the last
//! redraw, the upper chest is scanned for gray-dye placeholders, each one is
//! resolved and priced, new names are appended, and the list is re-sorted by
//! value. The list only grows while the session lasts: pages of every
//! category accumulate into one ranking.

use super::checked_pages::CheckedPages;
use super::pagination::{clamp_page, page_window, total_pages, ITEMS_PER_PAGE};
use crate::index::ItemIndex;
use crate::model::{strip_control_codes, ItemKind, MuseumItem, SlotSnapshot, GRAY_DYE_VARIANT};
use crate::pricing::{aggregate_value, PriceOracle};
use crate::resolve::resolve_candidates;
use crate::view::{PageControl, Point};
use tracing::{debug, trace};

/// Title prefix of every museum screen (colour codes stripped).
pub const MUSEUM_TITLE_PREFIX: &str = "Museum ➜";

/// Title suffix of the armor-set category.
pub const ARMOR_SETS_SUFFIX: &str = "Armor Sets";

/// Characters in front of the category name in a museum title (`"Museum ➜ "`).
pub const CATEGORY_PREFIX_CHARS: usize = 9;

/// Slots making up the upper chest.
pub const UPPER_CHEST_SLOTS: usize = 54;

/// Slot holding the "next page" arrow when there is a next page.
pub const NEXT_PAGE_SLOT: usize = 53;

/// Category part of a museum title, e.g. `"Weapons"` for `"Museum ➜ Weapons"`.
pub fn category_from_title(title: &str) -> String {
    title.chars().skip(CATEGORY_PREFIX_CHARS).collect()
}

/// One rendered row of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayRow<'a> {
    /// A tracked item with its price.
    Item(&'a MuseumItem),
    /// Shown in the advisory row while some category's last page is unseen.
    UnvisitedPagesWarning,
}

/// Session state behind the cheapest-item overlay.
#[derive(Debug, Clone, Default)]
pub struct DonationTracker {
    items: Vec<MuseumItem>,
    checked_pages: CheckedPages,
    current_page: usize,
    previous_snapshot: Option<SlotSnapshot>,
}

impl DonationTracker {
    /// Empty session on page 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one redraw.
    ///
    /// `title` is the colour-stripped container title. Returns `true` when the
    /// snapshot differed from the previous one and state was re-derived.
    pub fn on_snapshot<I, P>(
        &mut self,
        title: &str,
        snapshot: &SlotSnapshot,
        index: &I,
        prices: &P,
        now_ms: i64,
    ) -> bool
    where
        I: ItemIndex + ?Sized,
        P: PriceOracle + ?Sized,
    {
        if self.previous_snapshot.as_ref() == Some(snapshot) {
            return false;
        }

        self.parse_items(title, snapshot, index, prices, now_ms);
        self.check_if_highest_page_was_visited(title, snapshot);
        self.sort_by_price();
        self.previous_snapshot = Some(snapshot.clone());
        true
    }

    /// Route a click to the page control; returns `true` if the page changed.
    pub fn on_page_control_input(
        &mut self,
        control: &dyn PageControl,
        origin: Point,
        click: Point,
    ) -> bool {
        let total = self.total_pages();
        match control.on_click(origin, click, self.current_page, total) {
            Some(page) if page != self.current_page => {
                self.current_page = clamp_page(page, total);
                debug!(page = self.current_page, total, "Page switched");
                true
            }
            _ => false,
        }
    }

    fn parse_items<I, P>(
        &mut self,
        title: &str,
        snapshot: &SlotSnapshot,
        index: &I,
        prices: &P,
        now_ms: i64,
    ) where
        I: ItemIndex + ?Sized,
        P: PriceOracle + ?Sized,
    {
        let armor = title.ends_with(ARMOR_SETS_SUFFIX);
        let before = self.items.len();

        for slot_index in 0..UPPER_CHEST_SLOTS {
            let Some(stack) = snapshot.stack(slot_index) else {
                continue;
            };
            // Gray dye marks an item that has not been donated yet.
            if !stack.is_dye(GRAY_DYE_VARIANT) {
                continue;
            }

            let name = strip_control_codes(stack.display_name());
            if self.items.iter().any(|item| item.name == name) {
                trace!(name = %name, "Already tracked");
                continue;
            }

            let candidates = resolve_candidates(index, &name, armor);
            let value = aggregate_value(prices, &candidates);
            trace!(name = %name, ?value, "Tracking undonated item");
            self.items.push(MuseumItem::new(name, value, now_ms));
        }

        debug!(
            added = self.items.len() - before,
            total = self.items.len(),
            armor,
            "Parsed museum page"
        );
    }

    fn check_if_highest_page_was_visited(&mut self, title: &str, snapshot: &SlotSnapshot) {
        // An empty control slot says nothing either way.
        let Some(next_page) = snapshot.stack(NEXT_PAGE_SLOT) else {
            return;
        };
        if next_page.kind != ItemKind::Arrow {
            self.checked_pages
                .mark_last_page_visited(&category_from_title(title));
        }
    }

    /// Stable ascending sort; unknown values last.
    fn sort_by_price(&mut self) {
        self.items.sort_by(|a, b| a.value.cmp_ascending(&b.value));
    }

    /// Rows for the current page, including the advisory row.
    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        let visited_all = self.visited_all_pages();
        page_window(self.current_page)
            .take_while(|&i| i < self.items.len())
            .enumerate()
            .map(|(row, i)| {
                if row == ITEMS_PER_PAGE && !visited_all {
                    DisplayRow::UnvisitedPagesWarning
                } else {
                    DisplayRow::Item(&self.items[i])
                }
            })
            .collect()
    }

    /// Tracked items, cheapest first.
    pub fn items(&self) -> &[MuseumItem] {
        &self.items
    }

    /// Per-category last-page flags.
    pub fn checked_pages(&self) -> &CheckedPages {
        &self.checked_pages
    }

    /// Whether every category's last page has been seen.
    pub fn visited_all_pages(&self) -> bool {
        self.checked_pages.visited_all()
    }

    /// Zero-based page shown by the overlay.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to `page`, clamped into the available pages.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    /// Pages needed for the tracked items.
    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len())
    }
}

#[cfg(test)]
#[path = "donation_tests.rs"]
mod tests;
