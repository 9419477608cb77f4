//! Create command implementation

use super::base::print_provision_report;
use super::{Command, CommandContext};
use crate::provision::{RepositorySpec, Visibility};
use crate::workspace::FileSet;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Create a repository from generated or supplied files and push them
pub struct CreateCommand {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub local_path: PathBuf,
    /// JSON file mapping relative paths to file content
    pub files: Option<PathBuf>,
    pub gitignore_template: Option<String>,
    pub license_template: Option<String>,
}

impl CreateCommand {
    fn repository_spec(&self, default_private: bool) -> RepositorySpec {
        let mut spec = RepositorySpec::new(
            self.name.clone(),
            self.description.clone(),
            Visibility::from_private_flag(self.private || default_private),
        );
        spec.gitignore_template = self.gitignore_template.clone();
        spec.license_template = self.license_template.clone();
        spec
    }

    fn load_files(&self) -> Result<Option<FileSet>> {
        let Some(path) = &self.files else {
            return Ok(None);
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read files JSON '{}'", path.display()))?;
        Ok(Some(FileSet::from_json(&json)?))
    }
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let files = self.load_files()?;
        let spec = self.repository_spec(context.config.default_private);
        let local_path = std::path::absolute(&self.local_path)?;

        let provisioner = context.provisioner().await?;
        let report = provisioner
            .provision_with_files(&spec, &local_path, files)
            .await?;

        print_provision_report(&report, "Local path", &context.config.safe_branch_pattern);
        Ok(())
    }
}
