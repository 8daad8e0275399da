//! Config record kinds and their builders.
//!
//! Every record kind is a pure builder from the generation context to the
//! records it emits. [`RecordKind::ALL`] fixes the order in which the
//! generator runs them; portraits come first so the portrait set sees the
//! portrait configs written in the same run.

pub mod portraits;
pub mod templates;

use crate::clausewitz::Block;
use crate::error::Result;
use crate::naming::DerivedNames;
use crate::reporter::Reporter;
use crate::settings::ToolSettings;
use std::fs;
use std::path::{Path, PathBuf};

/// One config file to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRecord {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub content: Block,
}

/// Inputs shared by every record builder.
pub struct GenerationContext<'a> {
    pub output_root: &'a Path,
    pub settings: &'a ToolSettings,
    pub names: DerivedNames,
    pub reporter: Reporter,
}

impl<'a> GenerationContext<'a> {
    pub fn new(output_root: &'a Path, settings: &'a ToolSettings, reporter: Reporter) -> Self {
        Self {
            output_root,
            settings,
            names: DerivedNames::new(&settings.prefix, settings.archetype),
            reporter,
        }
    }

    pub fn image_root(&self) -> PathBuf {
        self.output_root.join(&self.settings.layout.image_root)
    }

    pub fn portraits_dir(&self) -> PathBuf {
        self.output_root.join(&self.settings.layout.portraits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Portraits,
    PortraitSets,
    SpeciesClass,
    SpeciesNames,
    PortraitCategories,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Portraits,
        RecordKind::PortraitSets,
        RecordKind::SpeciesClass,
        RecordKind::SpeciesNames,
        RecordKind::PortraitCategories,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Portraits => "portraits",
            RecordKind::PortraitSets => "portrait sets",
            RecordKind::SpeciesClass => "species class",
            RecordKind::SpeciesNames => "species names",
            RecordKind::PortraitCategories => "portrait categories",
        }
    }

    pub fn build(&self, ctx: &GenerationContext<'_>) -> Result<Vec<ConfigRecord>> {
        let layout = &ctx.settings.layout;
        let names = &ctx.names;
        let records = match self {
            RecordKind::Portraits => portraits::build(ctx)?,
            RecordKind::PortraitSets => {
                let portraits = portrait_config_stems(&ctx.portraits_dir())?;
                if portraits.is_empty() {
                    ctx.reporter.warn(format_args!(
                        "No portrait configs found in '{}', portrait set will be empty",
                        ctx.portraits_dir().display()
                    ));
                }
                vec![ConfigRecord {
                    path: layout.portrait_sets.join(&names.portrait_sets_file),
                    content: templates::portrait_sets(
                        &names.portrait_set,
                        &names.species_class,
                        portraits,
                    ),
                }]
            }
            RecordKind::SpeciesClass => vec![ConfigRecord {
                path: layout.species_classes.join(&names.species_classes_file),
                content: templates::species_class(&names.species_class, ctx.settings.archetype),
            }],
            RecordKind::SpeciesNames => vec![ConfigRecord {
                path: layout.species_names.join(&names.species_names_file),
                content: templates::species_names(&names.species_class, ctx.settings.archetype),
            }],
            RecordKind::PortraitCategories => vec![ConfigRecord {
                path: layout
                    .portrait_categories
                    .join(&names.portrait_categories_file),
                content: templates::portrait_categories(
                    &names.portrait_category,
                    &names.portrait_set,
                ),
            }],
        };
        Ok(records)
    }
}

/// Sorted stems of the `.txt` files directly inside `dir`. Empty if the
/// directory does not exist.
pub fn portrait_config_stems(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stems = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_config = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(crate::constants::CONFIG_EXTENSION));
        if is_config {
            if let Some(stem) = path.file_stem() {
                stems.push(stem.to_string_lossy().to_string());
            }
        }
    }
    stems.sort();
    Ok(stems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_order_puts_portraits_first() {
        assert_eq!(RecordKind::ALL[0], RecordKind::Portraits);
        assert_eq!(RecordKind::ALL[1], RecordKind::PortraitSets);
    }

    #[test]
    fn static_records_use_layout_and_names() {
        let settings = ToolSettings {
            prefix: "mymod".to_string(),
            ..ToolSettings::default()
        };
        let root = Path::new("does-not-exist");
        let ctx = GenerationContext::new(root, &settings, Reporter::silent());

        let class = RecordKind::SpeciesClass.build(&ctx).unwrap();
        assert_eq!(class.len(), 1);
        assert_eq!(
            class[0].path,
            PathBuf::from("common/species_classes/mymod_species_classes.txt")
        );
        assert!(class[0].content.contains_key("mymod_biological_class"));

        let categories = RecordKind::PortraitCategories.build(&ctx).unwrap();
        assert_eq!(
            categories[0].path,
            PathBuf::from("common/portrait_categories/mymod_portrait_categories.txt")
        );

        let sets = RecordKind::PortraitSets.build(&ctx).unwrap();
        assert!(sets[0].content.contains_key("mymod_portrait_set"));
    }

    #[test]
    fn missing_portrait_dir_has_no_stems() {
        assert!(portrait_config_stems(Path::new("does-not-exist")).unwrap().is_empty());
    }
}
