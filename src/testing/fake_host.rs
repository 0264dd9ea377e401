use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{AppError, RepoId};
use crate::ports::HostPort;

/// In-memory hosting platform: lists come from vectors, deletes mutate them.
pub struct FakeHost {
    pub default_branch: String,
    pub releases: Mutex<Vec<String>>,
    pub tags: Mutex<Vec<String>>,
    pub branches: Mutex<Vec<String>>,
    pub failing: Mutex<HashSet<String>>,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn new(default_branch: &str) -> Self {
        Self {
            default_branch: default_branch.to_string(),
            releases: Mutex::new(Vec::new()),
            tags: Mutex::new(Vec::new()),
            branches: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_releases(self, names: &[&str]) -> Self {
        *self.releases.lock().unwrap() = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_tags(self, names: &[&str]) -> Self {
        *self.tags.lock().unwrap() = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_branches(self, names: &[&str]) -> Self {
        *self.branches.lock().unwrap() = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Make every delete of `name` fail with a synthetic network error.
    pub fn fail_on(&self, name: &str) {
        self.failing.lock().unwrap().insert(name.to_string());
    }

    fn delete_from(
        &self,
        list: &Mutex<Vec<String>>,
        kind: &str,
        name: &str,
    ) -> Result<(), AppError> {
        if self.failing.lock().unwrap().contains(name) {
            return Err(AppError::ExternalToolError {
                tool: "gh".into(),
                error: format!("simulated network error deleting {}", name),
            });
        }
        list.lock().unwrap().retain(|candidate| candidate != name);
        self.deleted.lock().unwrap().push(format!("{} {}", kind, name));
        Ok(())
    }
}

impl HostPort for FakeHost {
    fn default_branch(&self, _repo: &RepoId) -> Result<String, AppError> {
        Ok(self.default_branch.clone())
    }

    fn list_releases(&self, _repo: &RepoId) -> Result<Vec<String>, AppError> {
        Ok(self.releases.lock().unwrap().clone())
    }

    fn delete_release(&self, _repo: &RepoId, tag: &str) -> Result<(), AppError> {
        self.delete_from(&self.releases, "release", tag)
    }

    fn list_tags(&self, _repo: &RepoId) -> Result<Vec<String>, AppError> {
        Ok(self.tags.lock().unwrap().clone())
    }

    fn delete_tag_ref(&self, _repo: &RepoId, tag: &str) -> Result<(), AppError> {
        self.delete_from(&self.tags, "tag", tag)
    }

    fn list_branches(&self, _repo: &RepoId) -> Result<Vec<String>, AppError> {
        Ok(self.branches.lock().unwrap().clone())
    }

    fn delete_branch_ref(&self, _repo: &RepoId, branch: &str) -> Result<(), AppError> {
        self.delete_from(&self.branches, "branch", branch)
    }
}
