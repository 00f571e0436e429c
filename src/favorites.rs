//! Saved favorites store
//!
//! This module persists the user's bookmarked items as a JSON array in an
//! XDG-compliant data directory. Favorites from all three sections live in
//! one ordered list, newest first, keyed by whichever identity field the
//! payload happens to carry. Storage failures are swallowed; losing a
//! favorite write must never interrupt the viewer.

use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the favorites list is persisted under
const FAVORITES_FILE: &str = "favorites.json";

/// Derives the identity key used for favorite membership.
///
/// The first present, non-null field wins: `id`, then `date`, then `url`,
/// then `img_src`. Numeric ids are stringified so a photo matches whether
/// its id came from a live payload or a reloaded file. The key space is
/// shared by all three payload shapes, so unrelated items carrying the
/// same field value are deliberately treated as the same favorite.
pub fn derived_key(item: &Value) -> Option<String> {
    for field in ["id", "date", "url", "img_src"] {
        match item.get(field) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            Some(other) => return Some(other.to_string()),
        }
    }
    None
}

/// Ordered, set-like store of bookmarked items.
///
/// The list is loaded once at startup and rewritten after every change.
/// A missing or corrupt file simply loads as empty, and a store built
/// without a directory (no resolvable home) works purely in memory.
#[derive(Debug)]
pub struct FavoriteStore {
    /// Directory the favorites file lives in, if one could be resolved
    data_dir: Option<PathBuf>,
    items: Vec<Value>,
}

impl FavoriteStore {
    /// Opens the store in the XDG data directory
    /// (`~/.local/share/stargaze/` on Linux).
    pub fn open() -> Self {
        match ProjectDirs::from("", "", "stargaze") {
            Some(dirs) => Self::with_dir(dirs.data_dir().to_path_buf()),
            None => Self::in_memory(),
        }
    }

    /// Opens the store against a specific directory
    ///
    /// Useful for testing or when a specific data location is needed.
    pub fn with_dir(data_dir: PathBuf) -> Self {
        let items = load_items(&data_dir);
        Self {
            data_dir: Some(data_dir),
            items,
        }
    }

    /// Creates a store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            data_dir: None,
            items: Vec::new(),
        }
    }

    /// All favorites, newest first.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with the same derived key is saved.
    pub fn contains(&self, item: &Value) -> bool {
        match derived_key(item) {
            Some(key) => self
                .items
                .iter()
                .any(|saved| derived_key(saved).as_deref() == Some(key.as_str())),
            None => false,
        }
    }

    /// Adds the item, or removes the saved entry sharing its derived key.
    ///
    /// New favorites go to the front of the list. Items carrying none of
    /// the identity fields cannot be keyed and are ignored.
    pub fn toggle(&mut self, item: &Value) {
        let Some(key) = derived_key(item) else {
            return;
        };

        let before = self.items.len();
        self.items
            .retain(|saved| derived_key(saved).as_deref() != Some(key.as_str()));

        if self.items.len() == before {
            self.items.insert(0, item.clone());
        }

        self.persist();
    }

    /// Rewrites the favorites file, ignoring any I/O failure.
    fn persist(&self) {
        let Some(dir) = &self.data_dir else {
            return;
        };
        let _ = fs::create_dir_all(dir);
        if let Ok(json) = serde_json::to_string_pretty(&self.items) {
            let _ = fs::write(dir.join(FAVORITES_FILE), json);
        }
    }
}

/// Loads the persisted list, treating any failure as an empty store.
fn load_items(dir: &Path) -> Vec<Value> {
    let path = dir.join(FAVORITES_FILE);
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}
