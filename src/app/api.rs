//! Public operations wired to the real `git` and `gh` adapters.

use std::str::FromStr;

use crate::adapters::{GitCommandAdapter, GitHubCliAdapter};
use crate::app::commands::{purge, reset, wipe};
use crate::domain::{AppError, RepoId, ResetOutcome, StageReport, WipeReport};
use crate::ports::HostPort;

pub use crate::app::commands::reset::ResetOptions;
pub use crate::app::commands::wipe::WipeOptions;

/// Run the full pipeline: reset history, then purge releases, tags, and branches.
pub fn wipe(repo: &str, options: &WipeOptions) -> Result<WipeReport, AppError> {
    let repo = RepoId::from_str(repo)?;
    let git = GitCommandAdapter::new();
    let host = GitHubCliAdapter::new();
    wipe::execute(&git, &host, &repo, options)
}

/// Rewrite the default branch to a single commit.
pub fn reset(repo: &str, options: &ResetOptions) -> Result<ResetOutcome, AppError> {
    let repo = RepoId::from_str(repo)?;
    let git = GitCommandAdapter::new();
    let host = GitHubCliAdapter::new();
    reset::execute(&git, &host, &repo, options)
}

/// Delete every release.
pub fn purge_releases(repo: &str, dry_run: bool) -> Result<StageReport, AppError> {
    let repo = RepoId::from_str(repo)?;
    let host = GitHubCliAdapter::new();
    purge::releases(&host, &repo, dry_run)
}

/// Delete every tag reference.
pub fn purge_tags(repo: &str, dry_run: bool) -> Result<StageReport, AppError> {
    let repo = RepoId::from_str(repo)?;
    let host = GitHubCliAdapter::new();
    purge::tags(&host, &repo, dry_run)
}

/// Delete every branch except the default branch.
pub fn purge_branches(repo: &str, dry_run: bool) -> Result<StageReport, AppError> {
    let repo = RepoId::from_str(repo)?;
    let host = GitHubCliAdapter::new();
    let default_branch = host.default_branch(&repo)?;
    purge::branches(&host, &repo, &default_branch, dry_run)
}
