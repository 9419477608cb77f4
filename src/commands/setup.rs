//! Setup command implementation

use super::{Command, CommandContext};
use crate::config::Config;
use crate::constants;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Create `.env` from the template and check the resulting configuration
pub struct SetupCommand {
    pub env_file: PathBuf,
    pub template_file: PathBuf,
}

impl Default for SetupCommand {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(constants::config::ENV_FILE),
            template_file: PathBuf::from(constants::config::ENV_TEMPLATE_FILE),
        }
    }
}

/// Whether setup had to create the env file
#[derive(Debug, PartialEq, Eq)]
pub enum EnvFileStatus {
    AlreadyPresent,
    CreatedFromTemplate,
}

impl SetupCommand {
    /// Make sure the env file exists, copying the template when needed
    pub fn ensure_env_file(&self) -> Result<EnvFileStatus> {
        if self.env_file.exists() {
            return Ok(EnvFileStatus::AlreadyPresent);
        }

        if !self.template_file.exists() {
            anyhow::bail!("{} file not found", self.template_file.display());
        }

        std::fs::copy(&self.template_file, &self.env_file).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                self.template_file.display(),
                self.env_file.display()
            )
        })?;
        Ok(EnvFileStatus::CreatedFromTemplate)
    }

    /// Configuration as it will be seen on the next run: env file values,
    /// overridden by variables already set in the process environment
    pub fn load_config(&self) -> Result<Config> {
        let file_values = read_env_file(&self.env_file)?;
        Ok(Config::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_values.get(key).cloned())
        }))
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    for item in dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
    {
        let (key, value) = item.with_context(|| format!("Invalid line in {}", path.display()))?;
        values.insert(key, value);
    }
    Ok(values)
}

#[async_trait]
impl Command for SetupCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<()> {
        println!("Setting up GitHub Repository Creator...");

        match self.ensure_env_file()? {
            EnvFileStatus::AlreadyPresent => {
                println!("{} file already exists", self.env_file.display())
            }
            EnvFileStatus::CreatedFromTemplate => {
                println!("Created {} file from template", self.env_file.display())
            }
        }

        println!(
            "\nPlease edit the {} file with your GitHub credentials:",
            self.env_file.display()
        );
        println!("   1. Get a Personal Access Token from: https://github.com/settings/tokens");
        println!("   2. Required scopes: repo, user");
        println!("   3. Set GITHUB_TOKEN in your .env file");
        println!("   4. Optionally set GITHUB_USERNAME");

        match self.load_config().and_then(|config| config.validate()) {
            Ok(()) => println!("\n{}", "Configuration is valid!".green()),
            Err(e) => println!("\n{} {}", "Configuration error:".yellow(), e),
        }
        Ok(())
    }
}
