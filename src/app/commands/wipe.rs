use crate::domain::{AppError, RepoId, WipeReport};
use crate::ports::{GitPort, HostPort};

use super::{purge, reset};

/// Options for the full wipe pipeline.
#[derive(Debug, Clone, Default)]
pub struct WipeOptions {
    pub dry_run: bool,
    pub reset: reset::ResetOptions,
}

/// Run the four stages in order: reset, releases, tags, branches.
///
/// Stage-level failures (clone, push, any listing call) abort the run;
/// per-item deletion failures are aggregated into the report and the
/// loops continue. In a dry run the reset stage is skipped entirely and
/// the purge stages enumerate without deleting.
pub fn execute(
    git: &impl GitPort,
    host: &impl HostPort,
    repo: &RepoId,
    options: &WipeOptions,
) -> Result<WipeReport, AppError> {
    let reset = if options.dry_run {
        None
    } else {
        Some(reset::execute(git, host, repo, &options.reset)?)
    };

    let default_branch = match &reset {
        Some(outcome) => outcome.branch.clone(),
        None => host.default_branch(repo)?,
    };

    let releases = purge::releases(host, repo, options.dry_run)?;
    let tags = purge::tags(host, repo, options.dry_run)?;
    let branches = purge::branches(host, repo, &default_branch, options.dry_run)?;

    Ok(WipeReport { reset, releases, tags, branches })
}
