//! Git operations using system git commands for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`operations`]: One function per git command used while publishing
//!   - `init_repository()`, `set_remote()`, `add_all_changes()`
//!   - `has_changes()`, `commit_changes()`, `push_branch()`
//!
//! - [`driver`]: The [`VersionControl`] trait and its [`GitCli`] implementation,
//!   which sequences the operations into a single `publish()`
//!
//! - [`common`]: Shared utilities and helpers
//!   - `Logger` - Consistent progress output

pub mod common;
pub mod driver;
pub mod operations;

pub use common::Logger;
pub use driver::{GitCli, PublishReport, VersionControl};
pub use operations::{
    PushOutcome, add_all_changes, commit_changes, get_remote_url, has_changes,
    init_repository, is_repository, push_branch, set_remote,
};
