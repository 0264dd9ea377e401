use std::fs;
use std::path::Path;
use std::process::Command;

use git2::{IndexAddOption, Repository};

use crate::domain::{AppError, CommitKind, RepoId};
use crate::ports::GitPort;

/// Local version-control adapter backed by git2 and the system `git` binary.
///
/// Object-database work (init, staging, the initial commit) goes through
/// libgit2; network operations shell out to `git` so the system credential
/// helpers apply.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd);

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn open(&self, workdir: &Path) -> Result<Repository, AppError> {
        Repository::open(workdir).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_repo(&self, repo: &RepoId, dest: &Path) -> Result<(), AppError> {
        let cwd = dest.parent().unwrap_or_else(|| Path::new("."));
        let dest_arg = dest.to_string_lossy();
        self.run(&["clone", &repo.clone_url(), &dest_arg], cwd)?;
        Ok(())
    }

    fn reinit(&self, workdir: &Path) -> Result<(), AppError> {
        let metadata = workdir.join(".git");
        if metadata.exists() {
            fs::remove_dir_all(&metadata)?;
        }
        Repository::init(workdir).map_err(|e| AppError::GitError {
            command: "git2::Repository::init".to_string(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn stage_all(&self, workdir: &Path) -> Result<(), AppError> {
        let repo = self.open(workdir)?;
        let mut index = repo.index().map_err(|e| AppError::GitError {
            command: "git2::Repository::index".to_string(),
            details: e.to_string(),
        })?;

        index.add_all(["*"], IndexAddOption::DEFAULT, None).map_err(|e| AppError::GitError {
            command: "git2::Index::add_all".to_string(),
            details: e.to_string(),
        })?;
        index.write().map_err(|e| AppError::GitError {
            command: "git2::Index::write".to_string(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn commit_all(&self, workdir: &Path, message: &str) -> Result<(String, CommitKind), AppError> {
        let repo = self.open(workdir)?;
        let mut index = repo.index().map_err(|e| AppError::GitError {
            command: "git2::Repository::index".to_string(),
            details: e.to_string(),
        })?;

        let kind = if index.is_empty() { CommitKind::Empty } else { CommitKind::Snapshot };

        let tree_id = index.write_tree().map_err(|e| AppError::GitError {
            command: "git2::Index::write_tree".to_string(),
            details: e.to_string(),
        })?;
        let tree = repo.find_tree(tree_id).map_err(|e| AppError::GitError {
            command: "git2::Repository::find_tree".to_string(),
            details: e.to_string(),
        })?;

        let signature = repo.signature().map_err(|e| AppError::GitError {
            command: "git2::Repository::signature".to_string(),
            details: e.to_string(),
        })?;

        // The repository was just reinitialized, so HEAD is unborn and the
        // commit has no parents.
        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[])
            .map_err(|e| AppError::GitError {
                command: "git2::Repository::commit".to_string(),
                details: e.to_string(),
            })?;

        Ok((oid.to_string(), kind))
    }

    fn add_remote(&self, workdir: &Path, name: &str, url: &str) -> Result<(), AppError> {
        let repo = self.open(workdir)?;
        repo.remote(name, url).map_err(|e| AppError::GitError {
            command: "git2::Repository::remote".to_string(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn force_push(&self, workdir: &Path, remote: &str, branch: &str) -> Result<(), AppError> {
        // HEAD may sit on a local branch whose name differs from the remote
        // default branch, so push by refspec.
        let refspec = format!("HEAD:refs/heads/{}", branch);
        self.run(&["push", "--force", remote, &refspec], workdir)?;
        Ok(())
    }
}
