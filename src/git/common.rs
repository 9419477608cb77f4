//! Common git utilities and shared helpers

use colored::*;

/// Logger for provisioning progress with consistent formatting
///
/// Each line is prefixed with a label (usually the repository name) in
/// cyan/bold so steps of one run are easy to follow.
///
/// ## Example
///
/// ```rust,no_run
/// use repo_creator::git::Logger;
///
/// let logger = Logger;
/// logger.info("demo", "Pushing to origin");
/// logger.success("demo", "Pushed");
/// ```
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg);
    }

    pub fn success(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg.yellow());
    }
}
