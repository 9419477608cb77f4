//! File system utility functions

use std::io;
use std::path::{Component, Path};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

/// True when `path` is relative and stays below the directory it is joined to
pub fn is_contained_relative_path(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
