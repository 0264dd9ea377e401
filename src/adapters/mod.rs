pub mod git_command;
pub mod github_cli;

pub use git_command::GitCommandAdapter;
pub use github_cli::GitHubCliAdapter;
