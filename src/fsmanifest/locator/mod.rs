//! # Resource Location
//!
//! Data files reach the application through a [`ResourceLocator`]: given a
//! logical name such as `_main/config/app.config`, return the file's content or
//! fail with an error naming the resource.
//!
//! ## Implementations
//!
//! - [`runfiles::RunfilesLocator`]: production lookup, following the Bazel
//!   runfiles conventions (manifest file, runfiles directory, or a
//!   `<binary>.runfiles/` tree next to the executable)
//! - [`memory::InMemoryLocator`]: a fixed name → content map for tests
//!
//! Logical names always use `/` separators regardless of platform. The first
//! path segment is the workspace name (`_main` for the root workspace).

use crate::error::Result;

pub mod memory;
pub mod runfiles;

pub use memory::InMemoryLocator;
pub use runfiles::RunfilesLocator;

/// A resolved data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    /// Where the content came from, for diagnostics (a file path for runfiles)
    pub origin: String,
    pub content: String,
}

pub trait ResourceLocator {
    /// Look up `name` and read its content.
    fn resolve(&self, name: &str) -> Result<Resource>;
}
