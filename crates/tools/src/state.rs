//! Submission state machine
//!
//! `Idle → Validating → (Rejected | Building) → Calling → (Rendered | Failed)`.
//! Building can also end in `Rejected` when an option slot is blank. Every
//! terminal state returns to `Idle`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Building,
    Calling,
    Rendered,
    Failed,
}

impl SubmissionState {
    pub fn allowed_transitions(&self) -> &'static [SubmissionState] {
        use SubmissionState::*;
        match self {
            Idle => &[Validating],
            Validating => &[Rejected, Building],
            Building => &[Rejected, Calling],
            Calling => &[Rendered, Failed],
            Rejected | Rendered | Failed => &[Idle],
        }
    }

    pub fn can_transition_to(&self, target: SubmissionState) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// End of a submission; the only way out is back to `Idle`
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Rejected | SubmissionState::Rendered | SubmissionState::Failed)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Validating => "Validating",
            SubmissionState::Rejected => "Rejected",
            SubmissionState::Building => "Building",
            SubmissionState::Calling => "Calling",
            SubmissionState::Rendered => "Rendered",
            SubmissionState::Failed => "Failed",
        }
    }
}

/// The states one submission visited, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trail(Vec<SubmissionState>);

impl Trail {
    pub fn new() -> Self {
        Self(vec![SubmissionState::Idle])
    }

    pub fn current(&self) -> SubmissionState {
        self.0.last().copied().unwrap_or_default()
    }

    /// Move to `next`. An illegal transition is ignored and reported as `false`.
    pub fn advance(&mut self, next: SubmissionState) -> bool {
        let current = self.current();
        if !current.can_transition_to(next) {
            tracing::error!(
                from = current.display_name(),
                to = next.display_name(),
                "Illegal submission transition"
            );
            return false;
        }
        self.0.push(next);
        true
    }

    pub fn states(&self) -> &[SubmissionState] {
        &self.0
    }

    /// The terminal state reached, if any
    pub fn outcome_state(&self) -> Option<SubmissionState> {
        self.0.iter().rev().find(|s| s.is_terminal()).copied()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
