//! Branch protection rule sets
//!
//! A branch is classified once at the call site as [`BranchClass::Main`],
//! [`BranchClass::Safe`] or [`BranchClass::Unclassified`], and
//! [`rules_for`] turns that classification into a declarative rule set.
//! The safe rules are never weaker than the main rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification that selects which rule set applies to a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchClass {
    Main,
    Safe,
    Unclassified,
}

impl BranchClass {
    /// Parse a caller-supplied classification
    ///
    /// Anything other than `main` or `safe` is `Unclassified`; parsing never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "main" => BranchClass::Main,
            "safe" => BranchClass::Safe,
            _ => BranchClass::Unclassified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BranchClass::Main => "main",
            BranchClass::Safe => "safe",
            BranchClass::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for BranchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative protection settings for one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionRuleSet {
    pub require_approvals: u32,
    pub dismiss_stale_reviews: bool,
    pub require_code_owner_review: bool,
    pub enforce_for_admins: bool,
    pub allow_force_push: bool,
    pub allow_deletion: bool,
    pub require_conversation_resolution: bool,
    pub require_linear_history: bool,
}

impl ProtectionRuleSet {
    fn main() -> Self {
        Self {
            require_approvals: 1,
            dismiss_stale_reviews: true,
            require_code_owner_review: true,
            enforce_for_admins: false,
            allow_force_push: false,
            allow_deletion: false,
            require_conversation_resolution: true,
            require_linear_history: true,
        }
    }

    fn safe() -> Self {
        Self {
            require_approvals: 2,
            enforce_for_admins: true,
            ..Self::main()
        }
    }

    /// True when `self` is at least as strict as `other` on every rule
    pub fn is_at_least_as_strict_as(&self, other: &ProtectionRuleSet) -> bool {
        self.require_approvals >= other.require_approvals
            && (self.dismiss_stale_reviews || !other.dismiss_stale_reviews)
            && (self.require_code_owner_review || !other.require_code_owner_review)
            && (self.enforce_for_admins || !other.enforce_for_admins)
            && (!self.allow_force_push || other.allow_force_push)
            && (!self.allow_deletion || other.allow_deletion)
            && (self.require_conversation_resolution || !other.require_conversation_resolution)
            && (self.require_linear_history || !other.require_linear_history)
    }
}

/// Rule set for a classification
///
/// `None` means no protection is requested; callers must check before use.
pub fn rules_for(class: BranchClass) -> Option<ProtectionRuleSet> {
    match class {
        BranchClass::Main => Some(ProtectionRuleSet::main()),
        BranchClass::Safe => Some(ProtectionRuleSet::safe()),
        BranchClass::Unclassified => None,
    }
}
