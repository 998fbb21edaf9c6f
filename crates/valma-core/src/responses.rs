//! Response types returned by the batch jobs and printed by the `valma` CLI.

use serde::{Deserialize, Serialize};

use crate::enums::{BatchOperation, FolderState, OutcomeStatus, Section};

/// What happened to one student folder during a batch job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderOutcome {
    pub folder: String,
    pub status: OutcomeStatus,
    pub reason: Option<String>,
}

impl FolderOutcome {
    #[must_use]
    pub fn processed(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            status: OutcomeStatus::Processed,
            reason: None,
        }
    }

    #[must_use]
    pub fn skipped(folder: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            status: OutcomeStatus::Skipped,
            reason: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.status == OutcomeStatus::Skipped
    }
}

/// Response from `valma merge` and `valma revert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchReport {
    pub operation: BatchOperation,
    pub processed: u32,
    pub skipped: u32,
    pub folders: Vec<FolderOutcome>,
    /// Helper files deleted after a revert, relative to the project root.
    pub helpers_removed: Vec<String>,
}

impl BatchReport {
    #[must_use]
    pub const fn new(operation: BatchOperation) -> Self {
        Self {
            operation,
            processed: 0,
            skipped: 0,
            folders: Vec::new(),
            helpers_removed: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FolderOutcome) {
        match outcome.status {
            OutcomeStatus::Processed => self.processed += 1,
            OutcomeStatus::Skipped => self.skipped += 1,
        }
        self.folders.push(outcome);
    }

    /// One-line console summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let label = match self.operation {
            BatchOperation::Merge => "Done.",
            BatchOperation::Revert => "Revert done.",
        };
        format!(
            "{label} Processed: {} Skipped: {}",
            self.processed, self.skipped
        )
    }
}

/// Per-folder entry in `valma status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderStatus {
    pub folder: String,
    pub state: FolderState,
    pub pages_present: Vec<Section>,
    pub has_combined: bool,
    pub has_stylesheet: bool,
    pub router_marker: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSummary {
    pub split: u32,
    pub merged: u32,
    pub partial: u32,
    pub empty: u32,
}

/// Response from `valma status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusReport {
    pub students_dir: String,
    pub folders: Vec<FolderStatus>,
    pub summary: StatusSummary,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn record_counts_each_outcome() {
        let mut report = BatchReport::new(BatchOperation::Merge);
        report.record(FolderOutcome::processed("a"));
        report.record(FolderOutcome::skipped("b", "missing required file studentHome.html"));
        report.record(FolderOutcome::processed("c"));

        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.summary(), "Done. Processed: 2 Skipped: 1");
    }

    #[test]
    fn revert_summary_has_its_own_label() {
        let report = BatchReport::new(BatchOperation::Revert);
        assert_eq!(report.summary(), "Revert done. Processed: 0 Skipped: 0");
    }

    #[test]
    fn outcome_serializes_status_snake_case() {
        let value = serde_json::to_value(FolderOutcome::skipped("x", "no combined document"))
            .unwrap();
        assert_eq!(value["status"], "skipped");
        assert_eq!(value["reason"], "no combined document");
    }
}
