mod checklist;
pub mod steps;

pub use checklist::consultant_checklist;
pub use steps::{project, ConnectorState, ProjectedStep, StepVisualState, WorkflowStep};
