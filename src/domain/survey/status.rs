//! FormStatus enum for tracking the lifecycle of a survey form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

impl FormStatus {
    /// Returns true if the form can still be edited.
    pub fn is_mutable(&self) -> bool {
        matches!(self, FormStatus::Editing)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Editing -> Submitted
    pub fn can_transition_to(&self, target: &FormStatus) -> bool {
        use FormStatus::*;
        matches!((self, target), (Editing, Submitted))
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormStatus::Editing => "Editing",
            FormStatus::Submitted => "Submitted",
        };
        write!(f, "{}", s)
    }
}
