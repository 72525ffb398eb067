//! Display themes for catalog items
//!
//! The catalog carries default labels and image paths; a theme file can
//! override them per item, plus the two-character glyph the text renderer
//! uses. Themes are TOML, keyed by the stable catalog ids, with a built-in
//! default so callers never need a file on disk.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::ItemKind;

/// Errors that can occur when loading or parsing theme files.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// Theme entries must key off catalog ids; anything else is a typo,
    /// not a silently-dropped entry.
    #[error("theme references unknown item id '{0}'")]
    UnknownItem(String),
}

/// Per-item display overrides.
#[derive(Debug, Clone, Default, Deserialize)]
struct ThemeEntry {
    label: Option<String>,
    image: Option<String>,
    glyph: Option<String>,
}

/// TOML structure for deserializing themes.
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    items: HashMap<String, ThemeEntry>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in theme: glyphs for every catalog item, no label or image
/// overrides.
const DEFAULT_THEME: &str = r#"
[metadata]
name = "default"
description = "Two-character glyphs for the text renderer"

[items.fridge]
glyph = "Fr"
[items.hob]
glyph = "Hb"
[items.oven]
glyph = "Ov"
[items.sink]
glyph = "Sk"
[items.dishwasher]
glyph = "Dw"
[items.microwave]
glyph = "Mw"
[items.prep-station]
glyph = "Pr"
[items.cupboard]
glyph = "Cb"
[items.shelf]
glyph = "Sh"
[items.trash-can]
glyph = "Tc"
[items.coffee-machine]
glyph = "Cf"
[items.mixer]
glyph = "Mx"
[items.serving-counter]
glyph = "Sv"
[items.dining-table]
glyph = "Dt"
"#;

/// A display theme mapping catalog items to presentation overrides.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: Option<String>,
    pub description: Option<String>,
    entries: HashMap<ItemKind, ThemeEntry>,
}

impl Theme {
    /// Parse a theme from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ThemeError> {
        let raw: TomlTheme = toml::from_str(text)?;
        let mut entries = HashMap::new();
        for (id, entry) in raw.items {
            let kind = ItemKind::from_id(&id).ok_or(ThemeError::UnknownItem(id))?;
            entries.insert(kind, entry);
        }
        let (name, description) = match raw.metadata {
            Some(meta) => (meta.name, meta.description),
            None => (None, None),
        };
        Ok(Self {
            name,
            description,
            entries,
        })
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Display label for an item, theme override first.
    pub fn label(&self, kind: ItemKind) -> String {
        self.entries
            .get(&kind)
            .and_then(|e| e.label.clone())
            .unwrap_or_else(|| kind.label().to_string())
    }

    /// Display image path for an item, theme override first.
    pub fn image_path(&self, kind: ItemKind) -> String {
        self.entries
            .get(&kind)
            .and_then(|e| e.image.clone())
            .unwrap_or_else(|| kind.image_path())
    }

    /// Two-character glyph for the text renderer. Falls back to the first
    /// two characters of the label when a theme omits it.
    pub fn glyph(&self, kind: ItemKind) -> String {
        match self.entries.get(&kind).and_then(|e| e.glyph.clone()) {
            Some(glyph) => glyph,
            None => self.label(kind).chars().take(2).collect(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_THEME).expect("built-in theme parses")
    }
}
