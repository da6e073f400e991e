pub mod classify;
pub mod domain;
pub mod export;
pub mod filter;
pub mod import;
pub mod summary;
pub mod view;

pub use classify::{
    classify_attendance, classify_resume_status, classify_training_status, AttendanceTier,
    DisplayTier,
};
pub use domain::{ConsultantRecord, Department, PrimarySkill, ResumeStatus, TrainingStatus};
pub use export::{to_csv, RosterExportError, CSV_HEADERS};
pub use filter::{apply, has_active_filters, FilterCriteria};
pub use import::{RosterFormat, RosterImportError, RosterImporter};
pub use summary::{summarize, AttendanceTierCount, RosterSummary, TierCount};
pub use view::{triage, ClassifiedConsultant, RosterView};
