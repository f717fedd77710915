//! Per-target outcomes for one mirror run.

use super::plan::Target;

/// What happened to a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was fetched and written to disk.
    Downloaded {
        /// Bytes written.
        bytes: u64,
    },
    /// Local path already existed; nothing was transferred.
    SkippedExists,
    /// HEAD probe returned a non-200 status; the file is treated as absent.
    SkippedMissing {
        /// The probe's status code.
        status: u16,
    },
    /// Probe or transfer failed; the run continued with the next target.
    Failed {
        /// Rendered error message.
        reason: String,
    },
}

/// A target's identity together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Lecture index of the target.
    pub lecture: u32,
    /// Concrete file name of the target.
    pub file_name: String,
    /// What happened.
    pub outcome: FileOutcome,
}

/// Outcomes of a mirror run, one per target, in enumeration order.
#[derive(Debug, Default)]
pub struct MirrorReport {
    outcomes: Vec<TargetOutcome>,
}

impl MirrorReport {
    pub(super) fn record(&mut self, target: &Target, outcome: FileOutcome) {
        self.outcomes.push(TargetOutcome {
            lecture: target.lecture,
            file_name: target.file_name.clone(),
            outcome,
        });
    }

    /// All outcomes in enumeration order.
    #[must_use]
    pub fn outcomes(&self) -> &[TargetOutcome] {
        &self.outcomes
    }

    /// Number of files fetched this run.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Downloaded { .. }))
    }

    /// Number of targets skipped because the local file already existed.
    #[must_use]
    pub fn skipped_existing(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::SkippedExists))
    }

    /// Number of targets skipped because the remote probe was non-200.
    #[must_use]
    pub fn skipped_missing(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::SkippedMissing { .. }))
    }

    /// Number of targets whose probe or transfer failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    /// Total number of targets considered.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}
