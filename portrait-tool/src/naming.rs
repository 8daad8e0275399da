/// Name and key derivation from portrait texture paths.
use crate::settings::Archetype;
use std::path::{Component, Path, PathBuf};

/// Replaces path separators, spaces and dashes with `_`.
pub fn replace_separators(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ' ' | '-' => '_',
            other => other,
        })
        .collect()
}

/// True when `text` can be written as a bare key in a config file.
pub fn is_bare_token(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(char::is_whitespace)
}

/// Joins the non-empty parts with `_`.
pub fn join_name(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Derives group keys, variant prefixes and image references for files
/// below a portrait image root.
#[derive(Debug, Clone)]
pub struct PortraitNaming {
    image_root: PathBuf,
    prefix: String,
}

impl PortraitNaming {
    pub fn new(image_root: &Path, prefix: &str) -> Self {
        Self {
            image_root: image_root.to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    pub fn image_root(&self) -> &Path {
        &self.image_root
    }

    fn relative<'a>(&self, file: &'a Path) -> Option<&'a Path> {
        file.strip_prefix(&self.image_root).ok()
    }

    /// The file's group folder, the first directory below the image root.
    /// `None` for files outside the root or directly inside it.
    pub fn group_folder(&self, file: &Path) -> Option<String> {
        let parent = self.relative(file)?.parent()?;
        normal_components(parent).into_iter().next()
    }

    /// Group key derived from the group folder.
    pub fn group_key(&self, file: &Path) -> Option<String> {
        let group = self.group_folder(file)?;
        Some(join_name(&[self.prefix.as_str(), replace_separators(&group).as_str()]))
    }

    /// Sub-folder path below the group folder, normalized. Empty when the
    /// file sits directly in its group folder.
    pub fn variant_prefix(&self, file: &Path) -> String {
        let Some(relative) = self.relative(file) else {
            return String::new();
        };
        // Ancestors include the path itself; the rest are its parent directories.
        if relative.ancestors().count() - 1 <= 2 {
            return String::new();
        }
        let parent = relative.parent().unwrap_or(Path::new(""));
        let variant = normal_components(parent)
            .into_iter()
            .skip(1)
            .collect::<Vec<_>>()
            .join("/");
        replace_separators(&variant)
    }

    /// Per-file identifier inside a portrait group.
    pub fn image_ref(&self, file: &Path) -> String {
        let stem = file
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let variant = self.variant_prefix(file);
        if variant.is_empty() {
            stem
        } else {
            join_name(&[variant.as_str(), stem.as_str()])
        }
    }
}

/// Fixed config names derived from the prefix and archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub species_class: String,
    pub portrait_set: String,
    pub portrait_category: String,
    pub portrait_sets_file: String,
    pub species_classes_file: String,
    pub species_names_file: String,
    pub portrait_categories_file: String,
}

impl DerivedNames {
    pub fn new(prefix: &str, archetype: Archetype) -> Self {
        let archetype = archetype.as_str().to_lowercase();
        let archetype = archetype.as_str();
        Self {
            species_class: join_name(&[prefix, archetype, "class"]),
            portrait_set: join_name(&[prefix, "portrait_set"]),
            portrait_category: join_name(&[prefix, "portrait_category"]),
            portrait_sets_file: format!("{}.txt", join_name(&[prefix, "portrait_sets"])),
            species_classes_file: format!("{}.txt", join_name(&[prefix, "species_classes"])),
            species_names_file: format!("{}.txt", join_name(&[prefix, "species_names"])),
            portrait_categories_file: format!(
                "{}.txt",
                join_name(&[prefix, "portrait_categories"])
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn naming(prefix: &str) -> PortraitNaming {
        PortraitNaming::new(Path::new("mod/gfx/models/portraits"), prefix)
    }

    #[rstest]
    #[case("a/b\\c d-e", "a_b_c_d_e")]
    #[case("plain", "plain")]
    #[case("", "")]
    fn separators_become_underscores(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(replace_separators(input), expected);
    }

    #[rstest]
    #[case("human/variant_a/face1.dds", "human", "variant_a", "variant_a_face1")]
    #[case("human/face1.dds", "human", "", "face1")]
    #[case("human/old ones/young-ish/face2.dds", "human", "old_ones_young_ish", "old_ones_young_ish_face2")]
    #[case("big cats/face3.dds", "big_cats", "", "face3")]
    fn derives_keys_from_path(
        #[case] relative: &str,
        #[case] group: &str,
        #[case] variant: &str,
        #[case] image_ref: &str,
    ) {
        let naming = naming("");
        let file = naming.image_root().join(relative);
        assert_eq!(naming.group_key(&file).as_deref(), Some(group));
        assert_eq!(naming.variant_prefix(&file), variant);
        assert_eq!(naming.image_ref(&file), image_ref);
    }

    #[test]
    fn prefix_is_joined_onto_group_key() {
        let naming = naming("mymod");
        let file = naming.image_root().join("human/face1.dds");
        assert_eq!(naming.group_key(&file).as_deref(), Some("mymod_human"));
    }

    #[test]
    fn variant_never_contains_group_segment() {
        let naming = naming("");
        let file = naming.image_root().join("my_humans/tall/face.dds");
        assert_eq!(naming.group_key(&file).as_deref(), Some("my_humans"));
        assert_eq!(naming.variant_prefix(&file), "tall");
    }

    #[test]
    fn files_without_group_folder_have_no_key() {
        let naming = naming("");
        assert_eq!(naming.group_key(&naming.image_root().join("loose.dds")), None);
        assert_eq!(naming.group_key(Path::new("elsewhere/human/a.dds")), None);
    }

    #[test]
    fn distinct_folders_can_share_a_key() {
        let naming = naming("");
        let spaced = naming.image_root().join("orc warriors/a.dds");
        let dashed = naming.image_root().join("orc-warriors/b.dds");
        assert_eq!(naming.group_folder(&spaced).as_deref(), Some("orc warriors"));
        assert_eq!(naming.group_folder(&dashed).as_deref(), Some("orc-warriors"));
        assert_eq!(naming.group_key(&spaced), naming.group_key(&dashed));
    }

    #[rstest]
    #[case("face1", true)]
    #[case("variant_a_face1", true)]
    #[case("face one", false)]
    #[case("face\tone", false)]
    #[case("", false)]
    fn bare_tokens(#[case] text: &str, #[case] bare: bool) {
        assert_eq!(is_bare_token(text), bare);
    }

    #[rstest]
    #[case("mymod", Archetype::Machine, "mymod_machine_class", "mymod_portrait_set")]
    #[case("", Archetype::Biological, "biological_class", "portrait_set")]
    fn derived_names(
        #[case] prefix: &str,
        #[case] archetype: Archetype,
        #[case] class: &str,
        #[case] set: &str,
    ) {
        let names = DerivedNames::new(prefix, archetype);
        assert_eq!(names.species_class, class);
        assert_eq!(names.portrait_set, set);
    }

    #[test]
    fn derived_file_names() {
        let names = DerivedNames::new("mymod", Archetype::Biological);
        assert_eq!(names.portrait_category, "mymod_portrait_category");
        assert_eq!(names.portrait_sets_file, "mymod_portrait_sets.txt");
        assert_eq!(names.species_classes_file, "mymod_species_classes.txt");
        assert_eq!(names.species_names_file, "mymod_species_names.txt");
        assert_eq!(names.portrait_categories_file, "mymod_portrait_categories.txt");
    }
}
