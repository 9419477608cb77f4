//! Desired repository state supplied by the caller

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Private => f.write_str("private"),
        }
    }
}

/// Repository to create on the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySpec {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    /// Ask the host to create an initial README commit
    #[serde(default)]
    pub auto_init: bool,
    #[serde(default)]
    pub gitignore_template: Option<String>,
    #[serde(default)]
    pub license_template: Option<String>,
}

impl RepositorySpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            visibility,
            auto_init: false,
            gitignore_template: None,
            license_template: None,
        }
    }

    pub fn with_auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    pub fn with_gitignore_template(mut self, template: impl Into<String>) -> Self {
        self.gitignore_template = Some(template.into());
        self
    }

    pub fn with_license_template(mut self, template: impl Into<String>) -> Self {
        self.license_template = Some(template.into());
        self
    }

    /// Copy with `default` filling an empty description
    pub(crate) fn with_default_description(&self, default: &str) -> Self {
        let mut spec = self.clone();
        if spec.description.trim().is_empty() {
            spec.description = default.to_string();
        }
        spec
    }
}
