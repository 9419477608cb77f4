//! Branch protection policy

pub mod policy;

pub use policy::{BranchClass, ProtectionRuleSet, rules_for};
