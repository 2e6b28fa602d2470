//! Domain model types (pure).
//!
//! Item descriptors, slot snapshots and museum rows are plain data; the
//! host converts its own representations into these on every event.

pub mod error;
pub mod item;
pub mod museum_item;
pub mod slot;
pub mod text;

// Re-export for convenience
pub use error::{IndexError, OverlayError, PricingError};
pub use item::{Compound, ItemKind, ItemStack, TagValue, GRAY_DYE_VARIANT, LIME_DYE_VARIANT};
pub use museum_item::{is_valid_price, ItemValue, MuseumItem, PRICE_UNAVAILABLE};
pub use slot::{Slot, SlotSnapshot};
pub use text::{clean_for_title_search, short_number_format, strip_control_codes};
