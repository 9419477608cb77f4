//! Local workspace materialization
//!
//! A [`FileSet`] maps relative paths to text content. [`materialize`] writes
//! it under a directory, creating parents as needed and overwriting files
//! that already exist. It is not transactional: a failure part-way leaves
//! the files written so far in place, and the call can simply be repeated.

use crate::error::{ProvisionError, ProvisionResult};
use crate::utils::filesystem::{ensure_directory_exists, is_contained_relative_path};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const DEFAULT_GITIGNORE: &str = "# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Virtual environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db
";

/// Relative path to text content, iterated in path order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSet {
    files: BTreeMap<String, String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The README and ignore file written when the caller supplies no files
    pub fn default_for(name: &str, description: &str) -> Self {
        let summary = if description.trim().is_empty() {
            "A new repository"
        } else {
            description
        };

        Self::new()
            .with_file("README.md", format!("# {}\n\n{}\n", name, summary))
            .with_file(".gitignore", DEFAULT_GITIGNORE)
    }

    /// Parse a JSON object of `path -> content`
    pub fn from_json(json: &str) -> ProvisionResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ProvisionError::internal(format!("Invalid files JSON: {}", e)))
    }

    /// Add a file, replacing any previous content at the same path
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Write every file of `files` under `directory`
pub fn materialize(directory: &Path, files: &FileSet) -> ProvisionResult<()> {
    ensure_directory_exists(directory).map_err(|e| {
        ProvisionError::internal(format!(
            "Failed to create directory {}: {}",
            directory.display(),
            e
        ))
    })?;

    for (relative, content) in files.iter() {
        if !is_contained_relative_path(Path::new(relative)) {
            return Err(ProvisionError::internal(format!(
                "File path must be relative to the workspace: {}",
                relative
            )));
        }

        let full_path = directory.join(relative);
        if let Some(parent) = full_path.parent() {
            ensure_directory_exists(parent)?;
        }

        std::fs::write(&full_path, content).map_err(|e| {
            ProvisionError::internal(format!("Failed to write {}: {}", full_path.display(), e))
        })?;
        debug!(file = relative, "created file");
    }

    Ok(())
}
