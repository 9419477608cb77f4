//! Command implementations

pub mod base;
pub mod create;
pub mod from_template;
pub mod protect;
pub mod setup;
pub mod test;
pub mod validators;

pub use base::{Command, CommandContext};
pub use create::CreateCommand;
pub use from_template::FromTemplateCommand;
pub use protect::{CreateBranchCommand, ProtectCommand};
pub use setup::SetupCommand;
pub use test::TestCommand;
