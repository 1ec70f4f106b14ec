pub mod fixtures;

use crate::errors::WalletError;

pub type Result<T> = std::result::Result<T, WalletError>;

/// Read-only source of fixture files, addressed by file name.
pub trait FixtureSource: Send + Sync {
    /// Returns the file contents, or `None` when the source has no such file.
    fn read(&self, file_name: &str) -> Result<Option<String>>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

pub use fixtures::{BundledFixtures, DirectoryFixtures, FixtureSet};
