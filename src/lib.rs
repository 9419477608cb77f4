//! Repo Creator - create a GitHub repository, push local files to it and
//! protect its `main` and `safe` branches

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod github;
pub mod protection;
pub mod provision;
pub mod utils;
pub mod workspace;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use error::{ErrorKind, ProvisionError, ProvisionResult};
pub use protection::BranchClass;
pub use provision::{Provisioner, ProvisionReport, RepositorySpec, Visibility};
pub use workspace::FileSet;
