//! Dashboard state and its pure reducer
//!
//! UI state is modeled as immutable values: the reducer consumes the
//! current state plus an action and returns the next state. This keeps the
//! engine testable independent of whatever rendering layer consumes it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Goal, Metric};

/// In-memory dashboard state shared by the cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardState {
    pub goals: Vec<Goal>,
    pub metrics: Vec<Metric>,
}

impl DashboardState {
    /// Count of completed goals
    pub fn completed_goals(&self) -> usize {
        self.goals.iter().filter(|g| g.is_completed).count()
    }
}

/// Actions the dashboard can apply to its state
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Flip the completion flag of the matching goal; unknown ids are a
    /// no-op
    ToggleGoal(Uuid),
    /// Append a new goal with a freshly assigned id
    AddGoal { title: String },
}

/// Apply an action, producing the next state
pub fn reduce(state: DashboardState, action: DashboardAction) -> DashboardState {
    match action {
        DashboardAction::ToggleGoal(id) => DashboardState {
            goals: state
                .goals
                .into_iter()
                .map(|goal| {
                    if goal.id == id {
                        Goal {
                            is_completed: !goal.is_completed,
                            ..goal
                        }
                    } else {
                        goal
                    }
                })
                .collect(),
            ..state
        },
        DashboardAction::AddGoal { title } => {
            let mut goals = state.goals;
            goals.push(Goal::new(title));
            DashboardState { goals, ..state }
        }
    }
}
