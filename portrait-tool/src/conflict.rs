/// Destination conflict handling shared by conversion and config writes.
use crate::error::{Result, ToolError};
use crate::reporter::Reporter;
use crate::settings::ConflictPolicy;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    Write,
    Skip,
}

/// Decides whether `destination` may be written under `policy`.
/// `Replace` never looks at the filesystem.
pub fn resolve(
    policy: ConflictPolicy,
    destination: &Path,
    reporter: &Reporter,
) -> Result<WriteDecision> {
    if policy == ConflictPolicy::Replace || !destination.is_file() {
        return Ok(WriteDecision::Write);
    }

    match policy {
        ConflictPolicy::Stop => Err(ToolError::FileConflict(destination.to_path_buf())),
        ConflictPolicy::Skip => {
            reporter.debug(format_args!(
                "File conflict: '{}' already exists, skipping",
                destination.display()
            ));
            Ok(WriteDecision::Skip)
        }
        ConflictPolicy::Replace => Ok(WriteDecision::Write),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ConflictPolicy::Replace)]
    #[case(ConflictPolicy::Stop)]
    #[case(ConflictPolicy::Skip)]
    fn missing_destination_is_always_written(#[case] policy: ConflictPolicy) {
        let missing = Path::new("definitely/not/here/face.dds");
        let decision = resolve(policy, missing, &Reporter::silent()).unwrap();
        assert_eq!(decision, WriteDecision::Write);
    }

    #[test]
    fn existing_destination_follows_policy() {
        // The crate manifest always exists while tests run.
        let existing = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let reporter = Reporter::silent();

        assert_eq!(
            resolve(ConflictPolicy::Replace, &existing, &reporter).unwrap(),
            WriteDecision::Write
        );
        assert_eq!(
            resolve(ConflictPolicy::Skip, &existing, &reporter).unwrap(),
            WriteDecision::Skip
        );
        assert!(matches!(
            resolve(ConflictPolicy::Stop, &existing, &reporter),
            Err(ToolError::FileConflict(path)) if path == existing
        ));
    }
}
