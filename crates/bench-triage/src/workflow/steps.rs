use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: String,
    pub label: String,
    pub completed: bool,
    #[serde(default)]
    pub in_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepVisualState {
    Completed,
    InProgress,
    Pending,
}

impl StepVisualState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectorState {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedStep {
    #[serde(flatten)]
    pub step: WorkflowStep,
    pub visual_state: StepVisualState,
    /// Link to the following step; absent on the last step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_state: Option<ConnectorState>,
}

impl WorkflowStep {
    /// `completed` wins when both flags are set.
    pub fn visual_state(&self) -> StepVisualState {
        if self.completed {
            StepVisualState::Completed
        } else if self.in_progress {
            StepVisualState::InProgress
        } else {
            StepVisualState::Pending
        }
    }

    /// A connector reflects only the step it leaves from.
    pub fn connector_state(&self) -> ConnectorState {
        if self.completed {
            ConnectorState::Completed
        } else {
            ConnectorState::Pending
        }
    }
}

pub fn project(steps: &[WorkflowStep]) -> Vec<ProjectedStep> {
    let last = steps.len().saturating_sub(1);

    steps
        .iter()
        .enumerate()
        .map(|(index, step)| ProjectedStep {
            step: step.clone(),
            visual_state: step.visual_state(),
            connector_state: (index < last).then(|| step.connector_state()),
        })
        .collect()
}
