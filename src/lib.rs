//! repurge: force-reset a repository's history and purge its releases, tags, and branches.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ResetOptions, WipeOptions, purge_branches, purge_releases, purge_tags, reset, wipe,
};
pub use domain::{AppError, CommitKind, ItemFailure, RepoId, ResetOutcome, StageReport, WipeReport};
