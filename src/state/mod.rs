//! Museum session state (pure).
//!
//! All state transitions are plain method calls driven by host events and
//! are testable without any GUI.

pub mod checked_pages;
pub mod donation;
pub mod pagination;

// Re-export for convenience
pub use checked_pages::{CheckedPages, DONATION_CATEGORIES, SPECIAL_ITEMS};
pub use donation::{
    category_from_title, DisplayRow, DonationTracker, ARMOR_SETS_SUFFIX, MUSEUM_TITLE_PREFIX,
    NEXT_PAGE_SLOT, UPPER_CHEST_SLOTS,
};
pub use pagination::{clamp_page, page_window, total_pages, ITEMS_PER_PAGE};
