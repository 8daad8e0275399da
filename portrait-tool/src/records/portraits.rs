/// Portrait group records built from converted textures under the image root.
use super::{ConfigRecord, GenerationContext};
use crate::clausewitz::{Block, Value};
use crate::constants::{CONFIG_EXTENSION, PORTRAIT_USAGES, TEXTURE_EXTENSION};
use crate::error::Result;
use crate::naming::{PortraitNaming, is_bare_token};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// One texture inside a portrait group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortraitEntry {
    pub image_ref: String,
    /// Path relative to the output root with `/` separators.
    pub texture_file: String,
}

/// All textures sharing a group key, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortraitGroup {
    pub key: String,
    pub entries: Vec<PortraitEntry>,
    /// Source folders that map to this key, first one first.
    pub folders: Vec<String>,
}

impl PortraitGroup {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            entries: Vec::new(),
            folders: Vec::new(),
        }
    }

    /// Records a source folder for this key. Returns true when it is a second,
    /// different folder being merged into the group.
    pub fn add_folder(&mut self, folder: &str) -> bool {
        if self.folders.iter().any(|known| known == folder) {
            return false;
        }
        self.folders.push(folder.to_string());
        self.folders.len() > 1
    }

    /// Adds an entry unless its image reference is already taken.
    /// Returns the existing entry on collision.
    pub fn add(&mut self, entry: PortraitEntry) -> std::result::Result<(), &PortraitEntry> {
        if let Some(index) = self
            .entries
            .iter()
            .position(|existing| existing.image_ref == entry.image_ref)
        {
            return Err(&self.entries[index]);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// First reference in scan order.
    pub fn default_ref(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.image_ref.as_str())
    }

    pub fn image_refs(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.image_ref.clone())
            .collect()
    }

    pub fn to_block(&self) -> Block {
        let mut portraits = Block::new();
        for entry in &self.entries {
            portraits.set(
                &entry.image_ref,
                Block::new().with("texturefile", entry.texture_file.as_str()),
            );
        }

        let mut group = Block::new();
        if let Some(default) = self.default_ref() {
            group.set("default", default);
        }
        for usage in PORTRAIT_USAGES {
            group.set(
                usage,
                Block::new().with("add", Block::new().with("portraits", self.image_refs())),
            );
        }

        Block::new()
            .with("portraits", portraits)
            .with("portrait_groups", Block::new().with(&self.key, Value::Block(group)))
    }
}

/// Output-root relative path with `/` separators, as the game expects.
pub fn texture_reference(output_root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(output_root).unwrap_or(file);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_texture(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXTURE_EXTENSION))
}

/// Scans the image root and buckets textures by group key.
pub fn collect_groups(ctx: &GenerationContext<'_>) -> Result<Vec<PortraitGroup>> {
    let image_root = ctx.image_root();
    if !image_root.is_dir() {
        ctx.reporter.warn(format_args!(
            "No portrait textures found, '{}' is not a directory",
            image_root.display()
        ));
        return Ok(Vec::new());
    }

    let naming = PortraitNaming::new(&image_root, &ctx.settings.prefix);
    let mut groups: BTreeMap<String, PortraitGroup> = BTreeMap::new();

    for entry in WalkDir::new(&image_root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_texture(path) {
            continue;
        }

        let (Some(folder), Some(group_key)) = (naming.group_folder(path), naming.group_key(path))
        else {
            ctx.reporter.warn(format_args!(
                "Ignoring '{}', textures must sit inside a group folder",
                path.display()
            ));
            continue;
        };

        let image_ref = naming.image_ref(path);
        if !is_bare_token(&image_ref) {
            ctx.reporter.warn(format_args!(
                "Ignoring '{}', image reference '{}' contains whitespace",
                path.display(),
                image_ref
            ));
            continue;
        }

        let portrait = PortraitEntry {
            image_ref,
            texture_file: texture_reference(ctx.output_root, path),
        };
        let group = groups
            .entry(group_key.clone())
            .or_insert_with(|| PortraitGroup::new(&group_key));
        if group.add_folder(&folder) {
            ctx.reporter.warn(format_args!(
                "Folder '{}' maps to group '{}' already used by folder '{}', merging them",
                folder, group_key, group.folders[0]
            ));
        }
        if let Err(existing) = group.add(portrait.clone()) {
            ctx.reporter.warn(format_args!(
                "Image reference '{}' in group '{}' already used by '{}', ignoring '{}'",
                portrait.image_ref, group_key, existing.texture_file, portrait.texture_file
            ));
        }
    }

    Ok(groups.into_values().collect())
}

pub fn build(ctx: &GenerationContext<'_>) -> Result<Vec<ConfigRecord>> {
    let groups = collect_groups(ctx)?;
    let records = groups
        .iter()
        .map(|group| {
            ctx.reporter.debug(format_args!(
                "Creating config for '{}' with {} portraits",
                group.key,
                group.entries.len()
            ));
            ConfigRecord {
                path: ctx
                    .settings
                    .layout
                    .portraits
                    .join(format!("{}.{}", group.key, CONFIG_EXTENSION)),
                content: group.to_block(),
            }
        })
        .collect();
    Ok(records)
}
