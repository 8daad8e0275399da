/// Image conversion backends and the mirrored source-to-output walk.
use crate::conflict::{WriteDecision, resolve};
use crate::constants::{MAGICK_DDS_ARGS, TEXTURE_EXTENSION};
use crate::dds_writer::write_rgba8_dds;
use crate::error::{Result, ToolError};
use crate::reporter::Reporter;
use crate::settings::{ConflictPolicy, ToolSettings};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Converts one source image into a DDS texture.
pub trait ImageConverter {
    /// Checks that the backend can run at all. Called once before a run.
    fn probe(&self) -> Result<()>;

    fn convert(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// External ImageMagick backend producing DXT5-compressed textures.
pub struct MagickConverter {
    executable: String,
}

impl MagickConverter {
    pub fn new(executable: &str) -> Self {
        Self {
            executable: executable.to_string(),
        }
    }

    /// Full argument list for converting `source` into `destination`.
    pub fn arguments(source: &Path, destination: &Path) -> Vec<OsString> {
        MAGICK_DDS_ARGS
            .iter()
            .map(OsString::from)
            .chain([source.as_os_str().to_owned(), destination.as_os_str().to_owned()])
            .collect()
    }
}

impl ImageConverter for MagickConverter {
    fn probe(&self) -> Result<()> {
        let missing = |reason: String| ToolError::MissingDependency {
            executable: self.executable.clone(),
            reason,
        };
        let output = Command::new(&self.executable)
            .arg("--version")
            .output()
            .map_err(|err| missing(err.to_string()))?;
        if !output.status.success() {
            return Err(missing(format!("version probe exited with {}", output.status)));
        }
        Ok(())
    }

    fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
        let failed = |reason: String| ToolError::Conversion {
            path: source.to_path_buf(),
            reason,
        };
        let output = Command::new(&self.executable)
            .args(Self::arguments(source, destination))
            .output()
            .map_err(|err| failed(err.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!("{} {}", output.status, stderr.trim())));
        }
        Ok(())
    }
}

/// In-process backend writing uncompressed RGBA8 textures.
#[derive(Default)]
pub struct BuiltinConverter;

impl ImageConverter for BuiltinConverter {
    fn probe(&self) -> Result<()> {
        Ok(())
    }

    fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
        let failed = |reason: String| ToolError::Conversion {
            path: source.to_path_buf(),
            reason,
        };
        let rgba = image::open(source)
            .map_err(|err| failed(err.to_string()))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut writer = BufWriter::new(File::create(destination)?);
        let written = write_rgba8_dds(&mut writer, width, height, rgba.into_raw())
            .map_err(|err| failed(err.to_string()))
            .and_then(|()| writer.flush().map_err(|err| failed(err.to_string())));
        if written.is_err() {
            drop(writer);
            remove_partial(destination);
        }
        written
    }
}

/// Removes a half-written texture so later runs do not treat it as done.
fn remove_partial(destination: &Path) {
    let is_regular = fs::symlink_metadata(destination).is_ok_and(|meta| meta.is_file());
    if is_regular {
        let _ = fs::remove_file(destination);
    }
}

/// Counters reported at the end of a conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub converted: usize,
    /// Destination existed under the skip policy.
    pub skipped: usize,
    pub failed: usize,
    /// Files whose extension is not accepted.
    pub ignored: usize,
}

/// Output location for a source entry: same relative path under the output root.
pub fn mirror_path(source_root: &Path, output_root: &Path, entry: &Path) -> PathBuf {
    let relative = entry.strip_prefix(source_root).unwrap_or(entry);
    output_root.join(relative)
}

/// Walks the source tree, mirrors its directories into the output tree and
/// converts every accepted image. Per-file conversion failures are logged and
/// counted; a conflict under [`ConflictPolicy::Stop`] aborts the walk.
pub struct BulkConverter<'a> {
    converter: &'a dyn ImageConverter,
    settings: &'a ToolSettings,
    reporter: Reporter,
    show_progress: bool,
}

impl<'a> BulkConverter<'a> {
    pub fn new(
        converter: &'a dyn ImageConverter,
        settings: &'a ToolSettings,
        reporter: Reporter,
    ) -> Self {
        Self {
            converter,
            settings,
            reporter,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn policy(&self) -> ConflictPolicy {
        self.settings.conflict
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::with_template(
            "[{bar:40.green/blue}] {pos}/{len} files ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏");
        pb.set_style(style);
        pb.set_message("Converting images");
        pb
    }

    pub fn run(&self, source_root: &Path, output_root: &Path) -> Result<ConversionSummary> {
        let entries = WalkDir::new(source_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut summary = ConversionSummary::default();
        let pb = self.progress_bar(entries.len());

        for entry in &entries {
            pb.inc(1);
            let path = entry.path();
            let mirrored = mirror_path(source_root, output_root, path);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&mirrored)?;
                continue;
            }
            if !path.is_file() {
                continue;
            }

            if !self.settings.accepts(path) {
                self.reporter.debug(format_args!(
                    "Skipping file '{}' as not accepted",
                    path.display()
                ));
                summary.ignored += 1;
                continue;
            }

            let destination = mirrored.with_extension(TEXTURE_EXTENSION);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }

            match resolve(self.policy(), &destination, &self.reporter) {
                Ok(WriteDecision::Write) => {}
                Ok(WriteDecision::Skip) => {
                    summary.skipped += 1;
                    continue;
                }
                Err(err) => {
                    pb.abandon();
                    return Err(err);
                }
            }

            self.reporter.info(format_args!(
                "Converting '{}' to '{}'",
                path.display(),
                destination.display()
            ));
            match self.converter.convert(path, &destination) {
                Ok(()) => summary.converted += 1,
                Err(err) => {
                    self.reporter.error(format_args!("{err}"));
                    summary.failed += 1;
                }
            }
        }

        pb.finish_with_message("Images converted");
        self.reporter.info(format_args!(
            "Conversion finished: {} converted, {} skipped, {} failed, {} ignored",
            summary.converted, summary.skipped, summary.failed, summary.ignored
        ));
        Ok(summary)
    }
}
