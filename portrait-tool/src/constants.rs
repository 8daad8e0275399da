/// Shared layout and format constants for portrait processing

/// Image extensions picked up by the converter (lowercase, with dot)
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &[".png"];

/// Extension written by every converter backend
pub const TEXTURE_EXTENSION: &str = "dds";

/// Extension of generated config files
pub const CONFIG_EXTENSION: &str = "txt";

/// Converted portrait textures, relative to the output root
pub const IMAGE_ROOT: &str = "gfx/models/portraits";

/// Generated portrait group configs
pub const PORTRAITS_DIR: &str = "gfx/portraits/portraits";

pub const PORTRAIT_SETS_DIR: &str = "common/portrait_sets";
pub const SPECIES_CLASSES_DIR: &str = "common/species_classes";
pub const SPECIES_NAMES_DIR: &str = "common/species_names";
pub const PORTRAIT_CATEGORIES_DIR: &str = "common/portrait_categories";

/// Default ImageMagick executable
pub const MAGICK_EXECUTABLE: &str = "magick";

/// Arguments placed before `<input> <output>` on the ImageMagick command line
pub const MAGICK_DDS_ARGS: &[&str] = &["-format", "dds", "-define", "dds:compression=dxt5"];

/// Keys whose values are always written as quoted strings
pub const ALWAYS_QUOTED_KEYS: &[&str] = &["texturefile", "name_list"];

/// Portrait group usage categories, in output order
pub const PORTRAIT_USAGES: &[&str] = &["game_setup", "species", "pop", "leader", "ruler"];

/// Indent width of the domain text writer
pub const INDENT_WIDTH: usize = 4;
