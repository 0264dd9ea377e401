use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AppError, CommitKind, RepoId};
use crate::ports::GitPort;

/// Records the sequence of git operations instead of touching a repository.
pub struct FakeGit {
    pub ops: Mutex<Vec<String>>,
    pub commit_kind: Mutex<CommitKind>,
}

impl Default for FakeGit {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGit {
    pub fn new() -> Self {
        Self { ops: Mutex::new(Vec::new()), commit_kind: Mutex::new(CommitKind::Snapshot) }
    }

    pub fn set_commit_kind(&self, kind: CommitKind) {
        *self.commit_kind.lock().unwrap() = kind;
    }

    /// Recorded operation names, arguments stripped.
    pub fn op_names(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.split(' ').next().unwrap_or_default().to_string())
            .collect()
    }

    fn record(&self, op: String) {
        self.ops.lock().unwrap().push(op);
    }
}

impl GitPort for FakeGit {
    fn clone_repo(&self, repo: &RepoId, _dest: &Path) -> Result<(), AppError> {
        self.record(format!("clone {}", repo));
        Ok(())
    }

    fn reinit(&self, _workdir: &Path) -> Result<(), AppError> {
        self.record("reinit".to_string());
        Ok(())
    }

    fn stage_all(&self, _workdir: &Path) -> Result<(), AppError> {
        self.record("stage_all".to_string());
        Ok(())
    }

    fn commit_all(&self, _workdir: &Path, message: &str) -> Result<(String, CommitKind), AppError> {
        self.record(format!("commit {}", message));
        Ok(("f".repeat(40), *self.commit_kind.lock().unwrap()))
    }

    fn add_remote(&self, _workdir: &Path, name: &str, url: &str) -> Result<(), AppError> {
        self.record(format!("add_remote {} {}", name, url));
        Ok(())
    }

    fn force_push(&self, _workdir: &Path, remote: &str, branch: &str) -> Result<(), AppError> {
        self.record(format!("force_push {} {}", remote, branch));
        Ok(())
    }
}
