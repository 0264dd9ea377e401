use crate::domain::{AppError, RepoId, ResetOutcome};
use crate::ports::{GitPort, HostPort};

/// Options for the history reset stage.
#[derive(Debug, Clone)]
pub struct ResetOptions {
    pub message: String,
}

impl Default for ResetOptions {
    fn default() -> Self {
        Self { message: "Initial commit".to_string() }
    }
}

/// Rewrite the default branch to a single commit equivalent to the
/// current working tree, overwriting all prior remote history.
///
/// The clone lives in a temporary scratch directory that is removed
/// when the stage finishes, successfully or not.
pub fn execute(
    git: &impl GitPort,
    host: &impl HostPort,
    repo: &RepoId,
    options: &ResetOptions,
) -> Result<ResetOutcome, AppError> {
    let branch = host.default_branch(repo)?;

    let scratch = tempfile::tempdir()?;
    let workdir = scratch.path().join("clone");

    git.clone_repo(repo, &workdir)?;
    git.reinit(&workdir)?;
    git.stage_all(&workdir)?;
    let (head, commit) = git.commit_all(&workdir, &options.message)?;
    git.add_remote(&workdir, "origin", &repo.clone_url())?;
    git.force_push(&workdir, "origin", &branch)?;

    Ok(ResetOutcome { branch, head, commit })
}
