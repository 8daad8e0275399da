/// Top-level orchestration of image conversion and config generation.
use crate::converter::{
    BuiltinConverter, BulkConverter, ConversionSummary, ImageConverter, MagickConverter,
};
use crate::error::{Result, ToolError};
use crate::generator::{ConfigGenerator, GenerationSummary};
use crate::reporter::Reporter;
use crate::settings::{ConverterKind, ToolSettings};
use std::fs;
use std::path::{Path, PathBuf};

/// Which pipelines a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub convert_images: bool,
    pub generate_configs: bool,
    pub show_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            convert_images: true,
            generate_configs: false,
            show_progress: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub conversion: Option<ConversionSummary>,
    pub generation: Option<GenerationSummary>,
}

/// Portrait tool bound to a source and output folder.
/// Construction checks the converter dependency and both folders.
pub struct PortraitTool {
    source_folder: PathBuf,
    output_folder: PathBuf,
    settings: ToolSettings,
    converter: Box<dyn ImageConverter>,
    options: RunOptions,
    reporter: Reporter,
}

impl PortraitTool {
    pub fn new(
        source_folder: &Path,
        output_folder: &Path,
        settings: ToolSettings,
        options: RunOptions,
        reporter: Reporter,
    ) -> Result<Self> {
        let converter: Box<dyn ImageConverter> = match settings.converter {
            ConverterKind::Magick => Box::new(MagickConverter::new(&settings.converter_executable)),
            ConverterKind::Builtin => Box::new(BuiltinConverter),
        };
        Self::with_converter(
            source_folder,
            output_folder,
            settings,
            converter,
            options,
            reporter,
        )
    }

    /// Same as [`PortraitTool::new`] with a caller supplied converter backend.
    pub fn with_converter(
        source_folder: &Path,
        output_folder: &Path,
        settings: ToolSettings,
        converter: Box<dyn ImageConverter>,
        options: RunOptions,
        reporter: Reporter,
    ) -> Result<Self> {
        let tool = Self {
            source_folder: source_folder.to_path_buf(),
            output_folder: output_folder.to_path_buf(),
            settings,
            converter,
            options,
            reporter,
        };

        if tool.options.convert_images {
            tool.check_dependencies()?;
        }
        tool.check_paths()?;
        Ok(tool)
    }

    fn check_dependencies(&self) -> Result<()> {
        self.converter.probe()?;
        self.reporter
            .debug(format_args!("Converter dependency check passed"));
        Ok(())
    }

    fn check_paths(&self) -> Result<()> {
        if !self.source_folder.is_dir() {
            return Err(ToolError::InvalidSource(self.source_folder.clone()));
        }
        fs::create_dir_all(&self.output_folder)?;
        Ok(())
    }

    pub fn convert_images(&self) -> Result<ConversionSummary> {
        BulkConverter::new(
            self.converter.as_ref(),
            &self.settings,
            self.reporter.for_component("portrait_tool::converter"),
        )
        .with_progress(self.options.show_progress)
        .run(&self.source_folder, &self.output_folder)
    }

    pub fn generate_configs(&self) -> Result<GenerationSummary> {
        ConfigGenerator::new(
            &self.settings,
            self.reporter.for_component("portrait_tool::generator"),
        )
        .run(&self.output_folder)
    }

    /// Runs the enabled pipelines in order: conversion, then generation.
    pub fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::default();
        if self.options.convert_images {
            report.conversion = Some(self.convert_images()?);
        } else {
            self.reporter
                .info(format_args!("Skipping image conversion"));
        }
        if self.options.generate_configs {
            report.generation = Some(self.generate_configs()?);
        }
        Ok(report)
    }
}
