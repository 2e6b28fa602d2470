//! Item resolution: noisy on-screen names to canonical internal names.
//!
//! Two resolvers share the title-word search:
//! - [`resolve_candidates`] returns every internal name a museum entry stands
//!   for (one for plain items, several pieces for an armor set).
//! - [`find_raw_item_for_name`] picks the single most specific template whose
//!   name appears inside the query; [`RawItemFinder`] memoises it.

use crate::cache::{LruMemo, DEFAULT_CAPACITY};
use crate::index::{ItemIndex, ItemTemplate};
use crate::model::{clean_for_title_search, strip_control_codes};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::{debug, trace};

/// An armor-set candidate must contain one of these in its internal name.
pub const ARMOR_PIECE_TOKENS: [&str; 4] = ["HELMET", "LEGGINGS", "CHESTPLATE", "BOOTS"];

/// Resolve a colour-stripped museum entry name into internal names.
///
/// Outside armor mode this is an exact display-name lookup (zero or one
/// result). In armor mode every piece matching the set name is returned.
pub fn resolve_candidates<I: ItemIndex + ?Sized>(
    index: &I,
    display_name: &str,
    armor: bool,
) -> Vec<String> {
    let candidates = if armor {
        resolve_armor_pieces(index, display_name)
    } else {
        index
            .id_for_display_name(&strip_control_codes(display_name))
            .map(|id| vec![id.to_string()])
            .unwrap_or_default()
    };
    trace!(name = display_name, armor, ?candidates, "Resolved candidates");
    candidates
}

fn resolve_armor_pieces<I: ItemIndex + ?Sized>(index: &I, display_name: &str) -> Vec<String> {
    let monochrome = clean_for_title_search(display_name);
    let set_name = monochrome.replace("armor", "");

    title_word_candidates(index, &monochrome)
        .into_iter()
        .filter(|id| {
            index
                .template(id)
                .is_some_and(|template| template.clean_name().contains(&set_name))
        })
        .filter(|id| ARMOR_PIECE_TOKENS.iter().any(|token| id.contains(token)))
        .map(str::to_string)
        .collect()
}

/// Union of title-word hits over every word of `monochrome`, first-seen order.
fn title_word_candidates<'a, I: ItemIndex + ?Sized>(index: &'a I, monochrome: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    monochrome
        .split(' ')
        .flat_map(move |word| index.title_word_ids(word))
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Most specific template whose monochrome name occurs inside `name`.
///
/// Ties on length keep the first candidate found.
pub fn find_raw_item_for_name<I: ItemIndex + ?Sized>(index: &I, name: &str) -> Option<ItemTemplate> {
    let monochrome = clean_for_title_search(name);
    title_word_candidates(index, &monochrome)
        .into_iter()
        .filter_map(|id| index.template(id))
        .filter(|template| {
            !template.display_name.is_empty() && monochrome.contains(&template.clean_name())
        })
        .min_by_key(|template| Reverse(template.display_name.chars().count()))
        .cloned()
}

/// Memoised [`find_raw_item_for_name`].
///
/// Only hits are cached. A miss is recomputed on the next lookup and never
/// evicts a cached hit. The cache is dropped whenever the index reports a new generation, and can
/// be dropped explicitly with [`RawItemFinder::clear_cache`].
pub struct RawItemFinder {
    memo: LruMemo<String, ItemTemplate>,
    generation: Option<u64>,
}

impl RawItemFinder {
    /// Finder holding at most `capacity` hits; 0 means [`DEFAULT_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self {
            memo: LruMemo::new(capacity),
            generation: None,
        }
    }

    /// Template whose clean name appears in `name`, from the cache when possible.
    pub fn find<I: ItemIndex + ?Sized>(&mut self, index: &I, name: &str) -> Option<ItemTemplate> {
        let generation = index.generation();
        if self.generation != Some(generation) {
            if self.generation.is_some() {
                debug!(generation, "Item index changed, dropping raw item cache");
            }
            self.memo.clear();
            self.generation = Some(generation);
        }
        self.memo
            .try_get_or_compute(name.to_string(), |name| {
                find_raw_item_for_name(index, name).ok_or(())
            })
            .ok()
    }

    /// Drop every cached hit.
    pub fn clear_cache(&mut self) {
        self.memo.clear();
    }

    /// Underlying memo, for inspecting its size and stats.
    pub fn memo(&self) -> &LruMemo<String, ItemTemplate> {
        &self.memo
    }
}

impl Default for RawItemFinder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
