//! Item template repository and the lookups built over it.
//!
//! Two indices are derived from the templates:
//! - title words: monochrome display-name word -> internal names containing it
//! - display names: colour-stripped display name -> internal name
//!
//! Every rebuild bumps [`ItemIndex::generation`], which is the reload signal
//! memoised lookups watch.

mod loader;

pub use loader::{load_templates_from_dir, parse_template};

use crate::model::{clean_for_title_search, strip_control_codes, ItemKind, ItemStack};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::info;

use crate::model::IndexError;

/// Lookups the resolution engine needs from an item repository.
pub trait ItemIndex {
    /// Internal names whose monochrome title contains `word`, in a stable order.
    fn title_word_ids(&self, word: &str) -> Vec<&str>;

    /// Template for an internal name.
    fn template(&self, internal_name: &str) -> Option<&ItemTemplate>;

    /// Exact reverse lookup from a colour-stripped display name.
    fn id_for_display_name(&self, display_name: &str) -> Option<&str>;

    /// Incremented on every reload.
    fn generation(&self) -> u64;
}

/// A known item template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    /// Canonical identifier, e.g. `MUSHROOM_HELMET`.
    pub internal_name: String,
    /// Display name including formatting codes.
    pub display_name: String,
    /// Registry item the template is built from.
    pub kind: ItemKind,
    /// Damage value copied onto built stacks.
    pub damage: u16,
    /// Default lore lines.
    pub lore: Vec<String>,
}

impl ItemTemplate {
    /// Template with no lore and a placeholder item kind.
    pub fn new(internal_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            display_name: display_name.into(),
            kind: ItemKind::Other("stone".to_string()),
            damage: 0,
            lore: Vec::new(),
        }
    }

    /// Monochrome form of the display name.
    pub fn clean_name(&self) -> String {
        clean_for_title_search(&self.display_name)
    }

    /// Build a fresh stack for this template.
    pub fn to_stack(&self) -> ItemStack {
        let mut stack = ItemStack::new(self.kind.clone(), self.damage)
            .with_display_name(self.display_name.clone());
        if !self.lore.is_empty() {
            stack.set_lore(self.lore.clone());
        }
        stack
    }
}

/// In-memory item repository.
#[derive(Debug, Default)]
pub struct ItemRepository {
    templates: HashMap<String, ItemTemplate>,
    title_words: HashMap<String, BTreeSet<String>>,
    display_names: HashMap<String, String>,
    generation: u64,
}

impl ItemRepository {
    /// Empty repository at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository indexing `templates`; later duplicates of a name win.
    pub fn from_templates(templates: impl IntoIterator<Item = ItemTemplate>) -> Self {
        let mut repo = Self::new();
        repo.rebuild(templates);
        repo
    }

    /// Load every item file under `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, IndexError> {
        Ok(Self::from_templates(load_templates_from_dir(dir)?))
    }

    /// Replace all templates and rebuild both indices.
    pub fn reload(&mut self, templates: impl IntoIterator<Item = ItemTemplate>) {
        self.rebuild(templates);
        self.generation += 1;
        info!(
            templates = self.templates.len(),
            generation = self.generation,
            "Item repository reloaded"
        );
    }

    /// Reload from an item directory. On error the current data is kept.
    pub fn reload_from_dir(&mut self, dir: &Path) -> Result<(), IndexError> {
        let templates = load_templates_from_dir(dir)?;
        self.reload(templates);
        Ok(())
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates are loaded.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn rebuild(&mut self, templates: impl IntoIterator<Item = ItemTemplate>) {
        self.templates = templates
            .into_iter()
            .map(|t| (t.internal_name.clone(), t))
            .collect();
        self.title_words.clear();
        self.display_names.clear();

        let mut ids: Vec<&String> = self.templates.keys().collect();
        ids.sort();
        for id in ids {
            let template = &self.templates[id];
            for word in template.clean_name().split(' ').filter(|w| !w.is_empty()) {
                self.title_words
                    .entry(word.to_string())
                    .or_default()
                    .insert(id.clone());
            }
            self.display_names
                .entry(strip_control_codes(&template.display_name))
                .or_insert_with(|| id.clone());
        }
    }
}

impl ItemIndex for ItemRepository {
    fn title_word_ids(&self, word: &str) -> Vec<&str> {
        self.title_words
            .get(word)
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn template(&self, internal_name: &str) -> Option<&ItemTemplate> {
        self.templates.get(internal_name)
    }

    fn id_for_display_name(&self, display_name: &str) -> Option<&str> {
        self.display_names.get(display_name).map(String::as_str)
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
