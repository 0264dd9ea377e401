/// How the resetter produced the fresh initial commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// The commit snapshots a non-empty working tree.
    Snapshot,
    /// The working tree had nothing to stage; an empty commit was created.
    Empty,
}

/// Result of rewriting the default branch to a single commit.
#[derive(Debug, Clone)]
pub struct ResetOutcome {
    pub branch: String,
    pub head: String,
    pub commit: CommitKind,
}

/// A deletion that failed and was skipped over.
#[derive(Debug, Clone)]
pub struct ItemFailure {
    pub name: String,
    pub error: String,
}

/// Accumulated result of one purge stage.
#[derive(Debug, Default)]
pub struct StageReport {
    pub deleted: Vec<String>,
    pub failed: Vec<ItemFailure>,
}

impl StageReport {
    /// True when every enumerated item was deleted.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Combined result of the full wipe pipeline.
#[derive(Debug)]
pub struct WipeReport {
    /// Absent when the reset stage was skipped (dry run).
    pub reset: Option<ResetOutcome>,
    pub releases: StageReport,
    pub tags: StageReport,
    pub branches: StageReport,
}

impl WipeReport {
    /// Total number of per-item failures across all purge stages.
    pub fn failure_count(&self) -> usize {
        self.releases.failed.len() + self.tags.failed.len() + self.branches.failed.len()
    }

    /// Total number of deletions performed (or planned, in a dry run).
    pub fn deletion_count(&self) -> usize {
        self.releases.deleted.len() + self.tags.deleted.len() + self.branches.deleted.len()
    }
}
