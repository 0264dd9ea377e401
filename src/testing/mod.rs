//! Fake port implementations for unit tests.

mod fake_git;
mod fake_host;

pub use fake_git::FakeGit;
pub use fake_host::FakeHost;
