/// Config generation: runs every record kind and writes the results.
use crate::clausewitz::ClausewitzWriter;
use crate::conflict::{WriteDecision, resolve};
use crate::error::Result;
use crate::records::{ConfigRecord, GenerationContext, RecordKind};
use crate::reporter::Reporter;
use crate::settings::ToolSettings;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Files written, relative to the output root.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub struct ConfigGenerator<'a> {
    settings: &'a ToolSettings,
    writer: ClausewitzWriter,
    reporter: Reporter,
}

impl<'a> ConfigGenerator<'a> {
    pub fn new(settings: &'a ToolSettings, reporter: Reporter) -> Self {
        Self {
            settings,
            writer: ClausewitzWriter::new(settings.quoted_keys.iter().cloned()),
            reporter,
        }
    }

    /// Builds and writes every record kind in dispatch order.
    pub fn run(&self, output_root: &Path) -> Result<GenerationSummary> {
        let ctx = GenerationContext::new(output_root, self.settings, self.reporter);
        let mut summary = GenerationSummary::default();

        for kind in RecordKind::ALL {
            self.reporter
                .debug(format_args!("Generating {} configs", kind.name()));
            for record in kind.build(&ctx)? {
                if self.write_record(output_root, &record)? {
                    summary.written.push(record.path);
                } else {
                    summary.skipped.push(record.path);
                }
            }
        }

        self.reporter.info(format_args!(
            "Config generation finished: {} written, {} skipped",
            summary.written.len(),
            summary.skipped.len()
        ));
        Ok(summary)
    }

    /// Returns false when the write policy skipped the record.
    fn write_record(&self, output_root: &Path, record: &ConfigRecord) -> Result<bool> {
        let destination = output_root.join(&record.path);
        if resolve(self.settings.conflict, &destination, &self.reporter)? == WriteDecision::Skip {
            return Ok(false);
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        self.reporter
            .info(format_args!("Saving config to '{}'", destination.display()));
        fs::write(&destination, self.writer.render(&record.content))?;
        Ok(true)
    }
}
