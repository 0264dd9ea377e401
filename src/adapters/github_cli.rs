use std::process::Command;

use serde::Deserialize;

use crate::domain::{AppError, RepoId};
use crate::ports::HostPort;

#[derive(Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(Deserialize)]
struct ReleaseEntry {
    #[serde(rename = "tagName")]
    tag_name: String,
}

#[derive(Deserialize)]
struct NamedEntry {
    name: String,
}

/// Hosting adapter backed by the `gh` CLI.
#[derive(Debug, Clone, Default)]
pub struct GitHubCliAdapter;

impl GitHubCliAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run_gh(&self, args: &[&str]) -> Result<String, AppError> {
        let mut cmd = Command::new("gh");
        cmd.args(args);

        let output = cmd.output().map_err(|e| AppError::ExternalToolError {
            tool: "gh".into(),
            error: format!("Failed to execute gh CLI: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::ExternalToolError {
                tool: "gh".into(),
                error: format!("gh command failed: {}", stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn list_names(&self, endpoint: &str, what: &str) -> Result<Vec<String>, AppError> {
        let output = self.run_gh(&["api", "--paginate", endpoint])?;
        if output.is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<NamedEntry> =
            serde_json::from_str(&output).map_err(|e| AppError::ParseError {
                what: what.into(),
                details: format!("Failed to parse gh api output: {}", e),
            })?;
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}

impl HostPort for GitHubCliAdapter {
    fn default_branch(&self, repo: &RepoId) -> Result<String, AppError> {
        let output = self.run_gh(&["api", &repo.api_path()])?;
        let info: RepoInfo = serde_json::from_str(&output).map_err(|e| AppError::ParseError {
            what: "repository metadata".into(),
            details: format!("Failed to parse gh api output: {}", e),
        })?;
        Ok(info.default_branch)
    }

    fn list_releases(&self, repo: &RepoId) -> Result<Vec<String>, AppError> {
        let repo_arg = repo.to_string();
        let output = self.run_gh(&["release", "list", "--repo", &repo_arg, "--json", "tagName"])?;
        if output.is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<ReleaseEntry> =
            serde_json::from_str(&output).map_err(|e| AppError::ParseError {
                what: "release list".into(),
                details: format!("Failed to parse gh release list output: {}", e),
            })?;
        Ok(entries.into_iter().map(|entry| entry.tag_name).collect())
    }

    fn delete_release(&self, repo: &RepoId, tag: &str) -> Result<(), AppError> {
        let repo_arg = repo.to_string();
        self.run_gh(&["release", "delete", tag, "--repo", &repo_arg, "--yes"])?;
        Ok(())
    }

    fn list_tags(&self, repo: &RepoId) -> Result<Vec<String>, AppError> {
        let endpoint = format!("{}/tags?per_page=100", repo.api_path());
        self.list_names(&endpoint, "tag list")
    }

    fn delete_tag_ref(&self, repo: &RepoId, tag: &str) -> Result<(), AppError> {
        let endpoint = format!("{}/git/refs/tags/{}", repo.api_path(), tag);
        self.run_gh(&["api", "-X", "DELETE", &endpoint])?;
        Ok(())
    }

    fn list_branches(&self, repo: &RepoId) -> Result<Vec<String>, AppError> {
        let endpoint = format!("{}/branches?per_page=100", repo.api_path());
        self.list_names(&endpoint, "branch list")
    }

    fn delete_branch_ref(&self, repo: &RepoId, branch: &str) -> Result<(), AppError> {
        let endpoint = format!("{}/git/refs/heads/{}", repo.api_path(), branch);
        self.run_gh(&["api", "-X", "DELETE", &endpoint])?;
        Ok(())
    }
}
