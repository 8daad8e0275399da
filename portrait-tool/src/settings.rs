//! Run settings shared by the converter and the config generator.
//!
//! Settings come from built-in defaults, optionally overlaid by a JSON
//! settings file, and finally by command-line flags (see `cli.rs`).

use crate::constants::{
    ACCEPTED_IMAGE_EXTENSIONS, ALWAYS_QUOTED_KEYS, IMAGE_ROOT, MAGICK_EXECUTABLE,
    PORTRAIT_CATEGORIES_DIR, PORTRAIT_SETS_DIR, PORTRAITS_DIR, SPECIES_CLASSES_DIR,
    SPECIES_NAMES_DIR,
};
use crate::error::{Result, ToolError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do when a destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Overwrite without checking.
    Replace,
    /// Abort the run on the first existing file.
    #[default]
    Stop,
    /// Leave the existing file and continue.
    Skip,
}

/// Species archetype selecting the species class and name templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Archetype {
    #[default]
    #[value(name = "BIOLOGICAL")]
    Biological,
    #[value(name = "MACHINE")]
    Machine,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Biological => "BIOLOGICAL",
            Archetype::Machine => "MACHINE",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend used to produce DDS textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConverterKind {
    /// External ImageMagick process (DXT5 compressed).
    #[default]
    Magick,
    /// In-process encoder writing uncompressed RGBA8.
    Builtin,
}

/// Relative locations inside the output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    pub image_root: PathBuf,
    pub portraits: PathBuf,
    pub portrait_sets: PathBuf,
    pub species_classes: PathBuf,
    pub species_names: PathBuf,
    pub portrait_categories: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from(IMAGE_ROOT),
            portraits: PathBuf::from(PORTRAITS_DIR),
            portrait_sets: PathBuf::from(PORTRAIT_SETS_DIR),
            species_classes: PathBuf::from(SPECIES_CLASSES_DIR),
            species_names: PathBuf::from(SPECIES_NAMES_DIR),
            portrait_categories: PathBuf::from(PORTRAIT_CATEGORIES_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Prefix joined onto group keys and derived config names.
    pub prefix: String,
    pub archetype: Archetype,
    pub conflict: ConflictPolicy,
    pub converter: ConverterKind,
    pub converter_executable: String,
    /// Lowercase extensions including the dot.
    pub accepted_extensions: Vec<String>,
    pub quoted_keys: Vec<String>,
    pub layout: OutputLayout,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            archetype: Archetype::default(),
            conflict: ConflictPolicy::default(),
            converter: ConverterKind::default(),
            converter_executable: MAGICK_EXECUTABLE.to_string(),
            accepted_extensions: ACCEPTED_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            quoted_keys: ALWAYS_QUOTED_KEYS.iter().map(|key| key.to_string()).collect(),
            layout: OutputLayout::default(),
        }
    }
}

impl ToolSettings {
    /// Loads settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| ToolError::Settings {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Self::from_json(&text).map_err(|err| ToolError::Settings {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// True when the lowercased extension of `path` is accepted for conversion.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.to_lowercase() == ext)
    }
}
