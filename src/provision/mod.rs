//! Repository provisioning
//!
//! [`Provisioner`] sequences the workspace, the git driver and the GitHub
//! gateway into three workflows:
//!
//! - `provision_with_files` - write files locally, create, publish, protect
//! - `provision_from_template` - create, publish an existing directory, protect
//! - `apply_protection` - protect one branch of an existing repository
//!
//! Protection failures after a successful publish are attached to the
//! [`ProvisionReport`] rather than failing the workflow.

pub mod orchestrator;
pub mod protection;
pub mod report;
pub mod spec;

pub use orchestrator::Provisioner;
pub use report::{ProtectionReport, ProvisionReport};
pub use spec::{RepositorySpec, Visibility};
