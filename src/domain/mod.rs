pub mod error;
pub mod repo;
pub mod report;

pub use error::AppError;
pub use repo::RepoId;
pub use report::{CommitKind, ItemFailure, ResetOutcome, StageReport, WipeReport};
