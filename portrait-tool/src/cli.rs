/// Command-line surface.
use crate::error::Result;
use crate::settings::{Archetype, ConflictPolicy, ConverterKind, ToolSettings};
use crate::tool::RunOptions;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "portrait-tool",
    version,
    about = "Tool used to generate portrait configs, and convert images to the required formats"
)]
pub struct Cli {
    /// The source folder containing all files/subfolders
    #[arg(short = 's', long = "source-folder", value_name = "PATH")]
    pub source_folder: PathBuf,

    /// The location to output all new files
    #[arg(short = 'o', long = "output-folder", value_name = "PATH")]
    pub output_folder: PathBuf,

    /// What to do when an output file already exists [default: stop]
    #[arg(long = "file-conflict", value_enum)]
    pub file_conflict: Option<ConflictPolicy>,

    /// Do not convert any images
    #[arg(long)]
    pub skip_image_convert: bool,

    /// Generate config files from the converted textures in the output folder
    #[arg(long)]
    pub generate_configs: bool,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    /// Prefix for group keys and generated config names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Species archetype used for the species class and names [default: BIOLOGICAL]
    #[arg(long, value_enum, ignore_case = true)]
    pub archetype: Option<Archetype>,

    /// Conversion backend [default: magick]
    #[arg(long, value_enum)]
    pub converter: Option<ConverterKind>,

    /// ImageMagick executable name or path
    #[arg(long = "converter-exe", value_name = "NAME")]
    pub converter_exe: Option<String>,

    /// JSON settings file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Hide the conversion progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Defaults, overlaid by the settings file, overlaid by flags.
    pub fn resolve_settings(&self) -> Result<ToolSettings> {
        let mut settings = match &self.settings {
            Some(path) => ToolSettings::load(path)?,
            None => ToolSettings::default(),
        };
        if let Some(conflict) = self.file_conflict {
            settings.conflict = conflict;
        }
        if let Some(prefix) = &self.prefix {
            settings.prefix = prefix.clone();
        }
        if let Some(archetype) = self.archetype {
            settings.archetype = archetype;
        }
        if let Some(converter) = self.converter {
            settings.converter = converter;
        }
        if let Some(exe) = &self.converter_exe {
            settings.converter_executable = exe.clone();
        }
        Ok(settings)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            convert_images: !self.skip_image_convert,
            generate_configs: self.generate_configs,
            show_progress: !self.no_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(["portrait-tool", "-s", "src", "-o", "out"].iter().chain(args))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.log_level, LevelFilter::Info);
        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings, ToolSettings::default());
        assert_eq!(settings.conflict, ConflictPolicy::Stop);
        assert_eq!(settings.archetype, Archetype::Biological);

        let options = cli.run_options();
        assert!(options.convert_images);
        assert!(!options.generate_configs);
    }

    #[test]
    fn flags_override_settings() {
        let cli = parse(&[
            "--file-conflict",
            "skip",
            "--archetype",
            "machine",
            "--prefix",
            "mymod",
            "--converter",
            "builtin",
            "--skip-image-convert",
            "--generate-configs",
            "--log-level",
            "debug",
        ]);
        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings.conflict, ConflictPolicy::Skip);
        assert_eq!(settings.archetype, Archetype::Machine);
        assert_eq!(settings.prefix, "mymod");
        assert_eq!(settings.converter, ConverterKind::Builtin);
        assert_eq!(cli.log_level, LevelFilter::Debug);

        let options = cli.run_options();
        assert!(!options.convert_images);
        assert!(options.generate_configs);
    }

    #[test]
    fn uppercase_archetype_is_accepted() {
        let cli = parse(&["--archetype", "MACHINE"]);
        assert_eq!(cli.archetype, Some(Archetype::Machine));
    }

    #[test]
    fn rejects_unknown_policy_and_missing_paths() {
        assert!(
            Cli::try_parse_from(["portrait-tool", "-s", "a", "-o", "b", "--file-conflict", "merge"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["portrait-tool", "-s", "a"]).is_err());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let cli = parse(&["--settings", "no/such/settings.json"]);
        assert!(cli.resolve_settings().is_err());
    }
}
