use std::path::Path;

use crate::domain::{AppError, CommitKind, RepoId};

/// Local version-control operations the resetter depends on.
pub trait GitPort {
    /// Clone the repository into `dest`.
    fn clone_repo(&self, repo: &RepoId, dest: &Path) -> Result<(), AppError>;

    /// Discard version-control metadata in `workdir` and reinitialize a fresh repository.
    fn reinit(&self, workdir: &Path) -> Result<(), AppError>;

    /// Stage every file under `workdir`.
    fn stage_all(&self, workdir: &Path) -> Result<(), AppError>;

    /// Create the initial commit and return its id.
    ///
    /// An empty working tree yields an empty commit rather than an error.
    fn commit_all(&self, workdir: &Path, message: &str) -> Result<(String, CommitKind), AppError>;

    /// Register a remote by name.
    fn add_remote(&self, workdir: &Path, name: &str, url: &str) -> Result<(), AppError>;

    /// Force-push HEAD to `branch` on `remote`, overwriting remote history.
    fn force_push(&self, workdir: &Path, remote: &str, branch: &str) -> Result<(), AppError>;
}
