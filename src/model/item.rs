//! Item stack descriptors and their tag data.
//!
//! The host hands over stacks as plain data: a kind, a damage/variant value,
//! an optional custom display name and a tag compound. Lore lives inside the
//! tag under `display.Lore`, mirroring the in-game layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dye damage value rendered as gray dye (undonated placeholder).
pub const GRAY_DYE_VARIANT: u16 = 8;

/// Dye damage value rendered as lime dye (donated, ready to show).
pub const LIME_DYE_VARIANT: u16 = 10;

/// Kind of an item stack, as far as the museum features care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// `minecraft:dye`; the variant selects the colour.
    Dye,
    /// `minecraft:arrow`; used as the "next page" control.
    Arrow,
    /// Anything else, by registry id.
    Other(String),
}

impl ItemKind {
    /// Map a registry id (`minecraft:dye`, `dye`, ...) onto a kind.
    pub fn from_registry_id(id: &str) -> Self {
        match id.strip_prefix("minecraft:").unwrap_or(id) {
            "dye" => ItemKind::Dye,
            "arrow" => ItemKind::Arrow,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

/// A single value inside an item tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagValue {
    /// Also used for booleans.
    Byte(i8),
    /// 32-bit integer.
    Int(i32),
    /// Text, such as a lore line.
    String(String),
    /// Ordered values.
    List(Vec<TagValue>),
    /// Nested named values.
    Compound(Compound),
}

/// Named tag values, ordered by key.
pub type Compound = BTreeMap<String, TagValue>;

/// An item stack descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Registry item.
    pub kind: ItemKind,
    /// Damage value; for dyes this is the colour.
    pub variant: u16,
    /// Custom display name, if the stack carries one.
    pub display_name: Option<String>,
    /// Extra data such as lore and attributes.
    #[serde(default)]
    pub tag: Compound,
}

impl ItemStack {
    /// Unnamed stack with an empty tag.
    pub fn new(kind: ItemKind, variant: u16) -> Self {
        Self {
            kind,
            variant,
            display_name: None,
            tag: Compound::new(),
        }
    }

    /// Builder-style display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Whether the stack carries a custom display name.
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    /// Display name, or empty when the stack has none.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    /// Set or replace the display name.
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Whether this is a dye of the given colour.
    pub fn is_dye(&self, variant: u16) -> bool {
        self.kind == ItemKind::Dye && self.variant == variant
    }

    /// Lore lines stored under `display.Lore`. Non-string entries are skipped.
    pub fn lore(&self) -> Vec<String> {
        let Some(TagValue::Compound(display)) = self.tag.get("display") else {
            return Vec::new();
        };
        let Some(TagValue::List(lines)) = display.get("Lore") else {
            return Vec::new();
        };
        lines
            .iter()
            .filter_map(|line| match line {
                TagValue::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Replace the lore lines, creating the `display` compound if needed.
    pub fn set_lore(&mut self, lines: Vec<String>) {
        let lore = TagValue::List(lines.into_iter().map(TagValue::String).collect());
        self.update_compound("display", |display| {
            display.insert("Lore".to_string(), lore);
        });
    }

    /// Edit the named child compound in place, creating it when absent.
    /// A non-compound value under `key` is replaced.
    pub fn update_compound(&mut self, key: &str, edit: impl FnOnce(&mut Compound)) {
        let mut compound = match self.tag.remove(key) {
            Some(TagValue::Compound(existing)) => existing,
            _ => Compound::new(),
        };
        edit(&mut compound);
        self.tag.insert(key.to_string(), TagValue::Compound(compound));
    }

    /// Read a boolean flag; booleans are stored as bytes.
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.tag.get(key), Some(TagValue::Byte(b)) if *b != 0)
    }

    /// Store a boolean flag as a byte.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.tag
            .insert(key.to_string(), TagValue::Byte(i8::from(value)));
    }
}
