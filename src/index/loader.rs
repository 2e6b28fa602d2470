//! Item repository loading from a directory of JSON item files.
//!
//! Each file describes one template:
//! ```json
//! { "internalname": "MUSHROOM_HELMET", "displayname": "§fMushroom Helmet",
//!   "itemid": "minecraft:red_mushroom", "damage": 0, "lore": ["..."] }
//! ```
//! Broken files are skipped with a warning; only an unreadable directory is
//! an error.

use super::ItemTemplate;
use crate::model::{IndexError, ItemKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ItemFile {
    internalname: String,
    #[serde(default)]
    displayname: String,
    #[serde(default)]
    itemid: String,
    #[serde(default)]
    damage: u16,
    #[serde(default)]
    lore: Vec<String>,
}

/// Parse a single item definition.
pub fn parse_template(path: &Path, contents: &str) -> Result<ItemTemplate, IndexError> {
    let file: ItemFile = serde_json::from_str(contents).map_err(|e| IndexError::ParseItem {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if file.internalname.trim().is_empty() {
        return Err(IndexError::MissingInternalName(path.to_path_buf()));
    }

    Ok(ItemTemplate {
        internal_name: file.internalname,
        display_name: file.displayname,
        kind: ItemKind::from_registry_id(&file.itemid),
        damage: file.damage,
        lore: file.lore,
    })
}

/// Read every `*.json` file directly under `dir`, in file-name order.
pub fn load_templates_from_dir(dir: &Path) -> Result<Vec<ItemTemplate>, IndexError> {
    let entries = std::fs::read_dir(dir).map_err(|source| IndexError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut templates = Vec::with_capacity(paths.len());
    for path in paths {
        match load_template(&path) {
            Ok(template) => templates.push(template),
            Err(err) => warn!(error = %err, "Skipping item definition"),
        }
    }

    debug!(dir = ?dir, count = templates.len(), "Loaded item templates");
    Ok(templates)
}

fn load_template(path: &Path) -> Result<ItemTemplate, IndexError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IndexError::ReadItem {
        path: path.to_path_buf(),
        source,
    })?;
    parse_template(path, &contents)
}
