//! Donated-item highlighter.
//!
//! Donated items show up in the museum as lime dye. Each one is swapped for
//! a copy of the real item (keeping the on-screen name and lore) stamped as
//! donated, and highlighted with a coloured square.

use super::{Rect, RenderSink};
use crate::index::{ItemIndex, ItemTemplate};
use crate::model::{strip_control_codes, ItemStack, SlotSnapshot, TagValue, LIME_DYE_VARIANT};
use crate::resolve::RawItemFinder;
use crate::state::MUSEUM_TITLE_PREFIX;
use tracing::{debug, trace};

/// Tag flag marking a stack produced by [`hydrate_museum_item`].
pub const MUSEUM_HYDRATED_ITEM_TAG: &str = "NEU_HYDRATED_MUSEUM_ITEM";

/// Compound holding game-side attributes.
pub const EXTRA_ATTRIBUTES: &str = "ExtraAttributes";

/// Attribute set to `1b` on donated items.
pub const DONATED_MUSEUM_ATTRIBUTE: &str = "donated_museum";

/// Edge length of a slot highlight.
pub const SLOT_SIZE: i32 = 16;

/// Whether an inventory title belongs to a museum screen.
pub fn is_museum_inventory(title: &str) -> bool {
    strip_control_codes(title).starts_with(MUSEUM_TITLE_PREFIX)
}

/// A named lime dye: a donated item the museum shows as a placeholder.
pub fn is_completed_retrieved_item(stack: &ItemStack) -> bool {
    stack.has_display_name() && stack.is_dye(LIME_DYE_VARIANT)
}

/// Whether `stack` was produced by [`hydrate_museum_item`].
pub fn is_hydrated_museum_item(stack: &ItemStack) -> bool {
    stack.get_bool(MUSEUM_HYDRATED_ITEM_TAG)
}

/// Copy `raw`, keep `original`'s name and lore, and stamp it as donated.
pub fn hydrate_museum_item(raw: &ItemTemplate, original: &ItemStack) -> ItemStack {
    let mut hydrated = raw.to_stack();
    hydrated.set_display_name(original.display_name());
    hydrated.set_lore(original.lore());
    hydrated.update_compound(EXTRA_ATTRIBUTES, |attributes| {
        attributes.insert(DONATED_MUSEUM_ATTRIBUTE.to_string(), TagValue::Byte(1));
    });
    hydrated.set_bool(MUSEUM_HYDRATED_ITEM_TAG, true);
    hydrated
}

/// Replaces donated placeholders and marks them on screen.
pub struct MuseumItemHighlighter {
    finder: RawItemFinder,
    color: u32,
}

impl MuseumItemHighlighter {
    /// `capacity` bounds the name lookup cache; `color` is ARGB.
    pub fn new(capacity: usize, color: u32) -> Self {
        Self {
            finder: RawItemFinder::new(capacity),
            color,
        }
    }

    /// Highlight colour, ARGB.
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Drop cached name lookups after the item repository was reloaded.
    pub fn on_repository_reload(&mut self) {
        debug!("Repository reload, clearing museum item cache");
        self.finder.clear_cache();
    }

    /// Replacement stack for `original`, if it is a donated placeholder on a
    /// museum screen whose real item is known.
    pub fn replacement_for<I: ItemIndex + ?Sized>(
        &mut self,
        index: &I,
        title: &str,
        original: &ItemStack,
    ) -> Option<ItemStack> {
        if !is_museum_inventory(title) || !is_completed_retrieved_item(original) {
            return None;
        }
        let raw = self.finder.find(index, original.display_name())?;
        trace!(
            name = original.display_name(),
            internal_name = %raw.internal_name,
            "Hydrating donated item"
        );
        Some(hydrate_museum_item(&raw, original))
    }

    /// Squares to fill behind every hydrated or donated slot.
    pub fn highlight_rects(&self, title: &str, snapshot: &SlotSnapshot) -> Vec<Rect> {
        if !is_museum_inventory(title) {
            return Vec::new();
        }
        snapshot
            .slots()
            .iter()
            .filter(|slot| {
                slot.stack.as_ref().is_some_and(|stack| {
                    is_hydrated_museum_item(stack) || is_completed_retrieved_item(stack)
                })
            })
            .map(|slot| Rect::new(slot.x, slot.y, SLOT_SIZE, SLOT_SIZE))
            .collect()
    }

    /// Draw [`highlight_rects`](Self::highlight_rects) in the configured colour.
    pub fn draw_highlights(&self, title: &str, snapshot: &SlotSnapshot, sink: &mut dyn RenderSink) {
        for rect in self.highlight_rects(title, snapshot) {
            sink.draw_rect(rect, self.color);
        }
    }

    /// Name lookup cache.
    pub fn finder(&self) -> &RawItemFinder {
        &self.finder
    }
}
