use crate::domain::{AppError, RepoId};

/// Hosting-platform operations the purge stages depend on.
///
/// The remote repository is only ever touched through this interface,
/// so the pipeline can be exercised against an in-memory fake.
pub trait HostPort {
    /// Name of the branch the host treats as primary.
    fn default_branch(&self, repo: &RepoId) -> Result<String, AppError>;

    /// Tag names of every release, in listing order.
    fn list_releases(&self, repo: &RepoId) -> Result<Vec<String>, AppError>;

    /// Delete the release addressed by `tag`.
    fn delete_release(&self, repo: &RepoId, tag: &str) -> Result<(), AppError>;

    /// Names of every tag reference.
    fn list_tags(&self, repo: &RepoId) -> Result<Vec<String>, AppError>;

    /// Delete `refs/tags/<tag>`.
    fn delete_tag_ref(&self, repo: &RepoId, tag: &str) -> Result<(), AppError>;

    /// Names of every branch.
    fn list_branches(&self, repo: &RepoId) -> Result<Vec<String>, AppError>;

    /// Delete `refs/heads/<branch>`.
    fn delete_branch_ref(&self, repo: &RepoId, branch: &str) -> Result<(), AppError>;
}
