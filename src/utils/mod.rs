//! Utility modules for common functionality

pub mod filesystem;
pub mod validators;

// Re-export commonly used functions
pub use filesystem::{ensure_directory_exists, is_contained_relative_path};
pub use validators::{ValidationError, validate_branch_name, validate_repository_name};
