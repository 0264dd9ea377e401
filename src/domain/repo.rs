use std::fmt;
use std::str::FromStr;

use super::AppError;

/// A validated `<owner>/<name>` repository identifier.
///
/// Guarantees:
/// - Exactly one `/` separating two non-empty segments
/// - Segments contain only alphanumeric characters, `-`, `_`, or `.`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTPS clone URL for the repository.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.name)
    }

    /// REST endpoint prefix (`repos/<owner>/<name>`).
    pub fn api_path(&self) -> String {
        format!("repos/{}/{}", self.owner, self.name)
    }
}

fn valid_segment(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl FromStr for RepoId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(2, '/');
        let owner = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();

        if !valid_segment(owner) || !valid_segment(name) {
            return Err(AppError::InvalidRepoId(value.to_string()));
        }

        Ok(Self { owner: owner.to_string(), name: name.to_string() })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
