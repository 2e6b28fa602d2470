//! Tests for item resolution and the memoised raw-item finder.

use super::*;
use crate::index::ItemRepository;

// ===== Test Helpers =====

fn repo() -> ItemRepository {
    ItemRepository::from_templates([
        ItemTemplate::new("MUSHROOM_HELMET", "§fMushroom Helmet"),
        ItemTemplate::new("MUSHROOM_CHESTPLATE", "§fMushroom Chestplate"),
        ItemTemplate::new("MUSHROOM_LEGGINGS", "§fMushroom Leggings"),
        ItemTemplate::new("MUSHROOM_BOOTS", "§fMushroom Boots"),
        ItemTemplate::new("MUSHROOM_SPORE", "§fMushroom Spore"),
        ItemTemplate::new("RED_MUSHROOM", "§fRed Mushroom"),
        ItemTemplate::new("ARMOR_OF_YOG_HELMET", "§6Armor of Yog Helmet"),
        ItemTemplate::new("ARMOR_OF_YOG_BOOTS", "§6Armor of Yog Boots"),
        ItemTemplate::new("ASPECT_OF_THE_END", "§9Aspect of the End"),
        ItemTemplate::new("ASPECT_OF_THE_DRAGONS", "§6Aspect of the Dragons"),
    ])
}

// ===== resolve_candidates: plain items =====

#[test]
fn plain_item_resolves_by_exact_display_name() {
    let repo = repo();
    assert_eq!(
        resolve_candidates(&repo, "Aspect of the End", false),
        vec!["ASPECT_OF_THE_END"]
    );
}

#[test]
fn plain_item_without_match_resolves_to_nothing() {
    let repo = repo();
    assert!(resolve_candidates(&repo, "Aspect of the Void", false).is_empty());
}

#[test]
fn plain_item_lookup_ignores_formatting_codes() {
    let repo = repo();
    assert_eq!(
        resolve_candidates(&repo, "§9Aspect of the End", false),
        vec!["ASPECT_OF_THE_END"]
    );
}

// ===== resolve_candidates: armor sets =====

#[test]
fn mushroom_armor_resolves_to_its_four_pieces() {
    let repo = repo();
    let pieces = resolve_candidates(&repo, "Mushroom Armor", true);

    assert_eq!(
        pieces,
        vec![
            "MUSHROOM_BOOTS",
            "MUSHROOM_CHESTPLATE",
            "MUSHROOM_HELMET",
            "MUSHROOM_LEGGINGS"
        ]
    );
    for piece in &pieces {
        assert!(ARMOR_PIECE_TOKENS.iter().any(|token| piece.contains(token)));
    }
}

#[test]
fn armor_mode_drops_non_piece_items_sharing_a_word() {
    let repo = repo();
    let pieces = resolve_candidates(&repo, "Mushroom Armor", true);
    assert!(!pieces.contains(&"MUSHROOM_SPORE".to_string()));
    assert!(!pieces.contains(&"RED_MUSHROOM".to_string()));
}

#[test]
fn armor_word_is_removed_everywhere_in_the_query() {
    let repo = repo();
    // "armor of yog" becomes " of yog", which both pieces contain.
    assert_eq!(
        resolve_candidates(&repo, "Armor of Yog", true),
        vec!["ARMOR_OF_YOG_BOOTS", "ARMOR_OF_YOG_HELMET"]
    );
}

#[test]
fn armor_candidates_are_deduplicated_across_words() {
    let repo = repo();
    // Both "yog" and "armor" hit every Yog piece.
    assert_eq!(
        resolve_candidates(&repo, "Yog Armor", true),
        vec!["ARMOR_OF_YOG_BOOTS", "ARMOR_OF_YOG_HELMET"]
    );
}

#[test]
fn unknown_armor_set_resolves_to_nothing() {
    let repo = repo();
    assert!(resolve_candidates(&repo, "Glacite Armor", true).is_empty());
}

// ===== find_raw_item_for_name =====

#[test]
fn raw_item_prefers_longest_contained_name() {
    let repo = repo();
    let template = find_raw_item_for_name(&repo, "§aRed Mushroom Helmet")
        .expect("a template is contained in the name");
    assert_eq!(template.internal_name, "MUSHROOM_HELMET");
}

#[test]
fn raw_item_requires_whole_template_name_inside_query() {
    let repo = repo();
    assert!(find_raw_item_for_name(&repo, "Aspect").is_none());
}

#[test]
fn raw_item_for_unrelated_name_is_none() {
    let repo = repo();
    assert!(find_raw_item_for_name(&repo, "Hyperion").is_none());
}

// ===== RawItemFinder =====

#[test]
fn finder_memoises_lookups() {
    let repo = repo();
    let mut finder = RawItemFinder::default();

    let first = finder.find(&repo, "§aMushroom Boots");
    let second = finder.find(&repo, "§aMushroom Boots");

    assert_eq!(first, second);
    assert_eq!(finder.memo().stats().misses, 1);
    assert_eq!(finder.memo().stats().hits, 1);
}

#[test]
fn finder_does_not_cache_misses() {
    let repo = ItemRepository::from_templates([ItemTemplate::new("HYPERION", "§6Hyperion")]);
    let mut finder = RawItemFinder::new(DEFAULT_CAPACITY);

    assert!(finder.find(&repo, "§5Mystery Blade").is_none());
    assert_eq!(finder.memo().len(), 0);

    assert!(finder.find(&repo, "§5Mystery Blade").is_none());
    assert_eq!(finder.memo().stats().misses, 2);
    assert!(finder.memo().is_empty());
}

#[test]
fn finder_miss_does_not_evict_cached_hit() {
    let repo = repo();
    let mut finder = RawItemFinder::new(1);
    finder.find(&repo, "Mushroom Boots").expect("boots resolve");

    assert!(finder.find(&repo, "Hyperion").is_none());

    assert_eq!(finder.memo().len(), 1);
    assert!(finder.memo().contains(&"Mushroom Boots".to_string()));
    assert_eq!(finder.memo().stats().evictions, 0);
}

#[test]
fn finder_drops_cache_when_repository_reloads() {
    let mut repo = repo();
    let mut finder = RawItemFinder::default();
    assert!(finder.find(&repo, "Hyperion").is_none());

    repo.reload([ItemTemplate::new("HYPERION", "§6Hyperion")]);

    let found = finder.find(&repo, "Hyperion").expect("reloaded repo has it");
    assert_eq!(found.internal_name, "HYPERION");
}

#[test]
fn finder_clear_cache_empties_memo() {
    let repo = repo();
    let mut finder = RawItemFinder::default();
    finder.find(&repo, "Mushroom Boots");
    assert_eq!(finder.memo().len(), 1);

    finder.clear_cache();
    assert!(finder.memo().is_empty());
}
