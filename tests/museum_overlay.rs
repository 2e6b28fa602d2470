//! Acceptance tests driving [`MuseumOverlay`] the way a host client would.
//!
//! Each scenario feeds screen events and inspects the recorded draw calls.

use museum_overlay::config::ResolvedConfig;
use museum_overlay::index::{ItemRepository, ItemTemplate};
use museum_overlay::model::{ItemKind, ItemStack, Slot, SlotSnapshot, GRAY_DYE_VARIANT, LIME_DYE_VARIANT};
use museum_overlay::pricing::PriceTable;
use museum_overlay::view::highlighter::is_hydrated_museum_item;
use museum_overlay::view::overlay::{BACKGROUND_TEXTURE, UNVISITED_PAGES_WARNING};
use museum_overlay::view::{DrawCommand, Point, ScreenGeometry};
use museum_overlay::{MuseumOverlay, MuseumScreen};
use serial_test::serial;
use std::fs;

// ===== Test Fixtures =====

const WEAPONS: &str = "§8Museum ➜ Weapons";
const ARMOR_SETS: &str = "§8Museum ➜ Armor Sets";
const RARITIES: &str = "§8Museum ➜ Rarities";

const GEOMETRY: ScreenGeometry = ScreenGeometry {
    gui_left: 100,
    gui_top: 50,
    x_size: 176,
};

fn repository() -> ItemRepository {
    let mut templates: Vec<ItemTemplate> = (0..10)
        .map(|i| ItemTemplate::new(format!("SWORD_{i}"), format!("§9Sword {i}")))
        .collect();
    templates.push(ItemTemplate::new("HYPERION", "§6Hyperion"));
    ItemRepository::from_templates(templates)
}

fn prices() -> PriceTable {
    (0..10)
        .map(|i| (format!("SWORD_{i}"), 1_000.0 * (10 - i) as f64))
        .collect()
}

fn gray_dye(name: &str) -> ItemStack {
    ItemStack::new(ItemKind::Dye, GRAY_DYE_VARIANT).with_display_name(name)
}

fn museum_page(stacks: Vec<ItemStack>, has_next_page: bool) -> SlotSnapshot {
    let mut slots: Vec<Slot> = (0..54)
        .map(|i| Slot::empty(8 + (i % 9) * 18, 18 + (i / 9) * 18))
        .collect();
    for (i, stack) in stacks.into_iter().enumerate() {
        slots[i].stack = Some(stack);
    }
    slots[53].stack = Some(if has_next_page {
        ItemStack::new(ItemKind::Arrow, 0).with_display_name("§aNext Page")
    } else {
        ItemStack::new(ItemKind::Other("barrier".into()), 0).with_display_name("§cClose")
    });
    SlotSnapshot::new(slots)
}

fn swords_page() -> SlotSnapshot {
    museum_page(
        (0..10).map(|i| gray_dye(&format!("§9Sword {i}"))).collect(),
        true,
    )
}

fn draw(
    overlay: &mut MuseumOverlay,
    title: &str,
    slots: &SlotSnapshot,
    repo: &ItemRepository,
    prices: &PriceTable,
) -> Vec<DrawCommand> {
    overlay.on_screen_changed(Some(title));
    let screen = MuseumScreen {
        title,
        slots,
        geometry: GEOMETRY,
    };
    let mut sink: Vec<DrawCommand> = Vec::new();
    assert!(overlay.on_background_drawn(&screen, repo, prices, &mut sink));
    sink
}

fn row_labels(commands: &[DrawCommand]) -> Vec<(String, String)> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::AlignedString { left, right, .. } => Some((left.clone(), right.clone())),
            _ => None,
        })
        .collect()
}

fn shows_banner(commands: &[DrawCommand]) -> bool {
    commands
        .iter()
        .any(|cmd| matches!(cmd, DrawCommand::Text { text, .. } if text == UNVISITED_PAGES_WARNING))
}

// ===== Cheapest-item panel =====

#[test]
fn first_page_lists_cheapest_items_with_banner() {
    let mut overlay = MuseumOverlay::new(ResolvedConfig::default()).expect("valid config");
    let repo = repository();
    let prices = prices();

    let commands = draw(&mut overlay, WEAPONS, &swords_page(), &repo, &prices);

    assert!(matches!(
        &commands[0],
        DrawCommand::Texture { texture, rect } if texture == BACKGROUND_TEXTURE && rect.x == 280.0 && rect.y == 50.0
    ));

    let rows = row_labels(&commands);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], ("§r§9Sword 9".to_string(), "§b1k".to_string()));
    assert_eq!(rows[7], ("§r§9Sword 2".to_string(), "§b8k".to_string()));
    assert!(shows_banner(&commands));
}

#[test]
fn right_arrow_moves_to_second_page() {
    let mut overlay = MuseumOverlay::new(ResolvedConfig::default()).expect("valid config");
    let repo = repository();
    let prices = prices();
    let slots = swords_page();
    draw(&mut overlay, WEAPONS, &slots, &repo, &prices);

    let screen = MuseumScreen {
        title: WEAPONS,
        slots: &slots,
        geometry: GEOMETRY,
    };
    let right_arrow = Point::new(100 + 237 + 37 + 2, 50 + 110 + 2);
    assert!(overlay.on_mouse_click(&screen, right_arrow, true));
    assert!(!overlay.on_mouse_click(&screen, right_arrow, true));

    let commands = draw(&mut overlay, WEAPONS, &slots, &repo, &prices);
    let rows = row_labels(&commands);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].0, "§r§9Sword 0");
    assert!(commands
        .iter()
        .any(|cmd| matches!(cmd, DrawCommand::Text { text, .. } if text == "2/2")));
}

#[test]
fn banner_disappears_once_every_last_page_was_seen() {
    let mut overlay = MuseumOverlay::new(ResolvedConfig::default()).expect("valid config");
    let repo = repository();
    let prices = prices();

    let commands = draw(&mut overlay, WEAPONS, &swords_page(), &repo, &prices);
    assert!(shows_banner(&commands));

    draw(&mut overlay, ARMOR_SETS, &museum_page(Vec::new(), false), &repo, &prices);
    draw(&mut overlay, RARITIES, &museum_page(Vec::new(), false), &repo, &prices);
    let commands = draw(&mut overlay, WEAPONS, &museum_page(Vec::new(), false), &repo, &prices);

    assert!(!shows_banner(&commands));
    let rows = row_labels(&commands);
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[8].0, "§r§9Sword 1");
}

#[test]
fn leaving_the_museum_forgets_tracked_items() {
    let mut overlay = MuseumOverlay::new(ResolvedConfig::default()).expect("valid config");
    let repo = repository();
    let prices = prices();
    draw(&mut overlay, WEAPONS, &swords_page(), &repo, &prices);
    assert_eq!(overlay.session().map(|s| s.items().len()), Some(10));

    overlay.on_screen_changed(Some("Chest"));
    assert!(overlay.session().is_none());

    let commands = draw(&mut overlay, RARITIES, &museum_page(Vec::new(), true), &repo, &prices);
    assert!(row_labels(&commands).is_empty());
}

// ===== Donated-item highlighting =====

#[test]
fn donated_placeholder_is_replaced_and_highlighted() {
    let mut overlay = MuseumOverlay::new(ResolvedConfig::default()).expect("valid config");
    let repo = repository();
    let donated = ItemStack::new(ItemKind::Dye, LIME_DYE_VARIANT).with_display_name("§6Hyperion");
    let slots = museum_page(vec![donated.clone()], false);

    let replacement = overlay
        .on_item_override(&repo, WEAPONS, &donated)
        .expect("donated item is hydrated");
    assert!(is_hydrated_museum_item(&replacement));
    assert_eq!(replacement.display_name(), "§6Hyperion");
    assert!(!replacement.is_dye(LIME_DYE_VARIANT));

    let screen = MuseumScreen {
        title: WEAPONS,
        slots: &slots,
        geometry: GEOMETRY,
    };
    let mut sink: Vec<DrawCommand> = Vec::new();
    overlay.draw_highlights(&screen, &mut sink);
    let color = overlay.config().highlight_argb().expect("valid color");
    assert_eq!(sink.len(), 1);
    assert!(matches!(sink[0], DrawCommand::Fill { color: c, .. } if c == color));
}

#[test]
fn items_outside_the_museum_are_left_alone() {
    let mut overlay = MuseumOverlay::new(ResolvedConfig::default()).expect("valid config");
    let donated = ItemStack::new(ItemKind::Dye, LIME_DYE_VARIANT).with_display_name("§6Hyperion");

    assert!(overlay
        .on_item_override(&repository(), "Auction House", &donated)
        .is_none());
}

// ===== Configuration =====

#[test]
#[serial(env)]
fn config_file_disables_features() {
    let dir = std::env::temp_dir().join("museum_overlay_acceptance_config");
    let _ = fs::create_dir_all(&dir);
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "cheapest_item_overlay = false\nitem_highlight = false\n",
    )
    .expect("write config");

    let mut overlay = MuseumOverlay::from_config_path(Some(path)).expect("config loads");
    let repo = repository();
    let slots = swords_page();
    let screen = MuseumScreen {
        title: WEAPONS,
        slots: &slots,
        geometry: GEOMETRY,
    };
    let donated = ItemStack::new(ItemKind::Dye, LIME_DYE_VARIANT).with_display_name("§6Hyperion");

    let mut sink: Vec<DrawCommand> = Vec::new();
    assert!(!overlay.on_background_drawn(&screen, &repo, &prices(), &mut sink));
    assert!(overlay.on_item_override(&repo, WEAPONS, &donated).is_none());
    overlay.draw_highlights(&screen, &mut sink);
    assert!(sink.is_empty());

    let _ = fs::remove_dir_all(&dir);
}
