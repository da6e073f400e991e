use bench_triage::roster::{ConsultantRecord, RosterImporter};
use bench_triage::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only roster shared across request handlers.
pub(crate) type SharedRoster = Arc<Vec<ConsultantRecord>>;

pub(crate) fn load_roster(path: Option<&Path>) -> Result<SharedRoster, AppError> {
    let roster = match path {
        Some(path) => {
            let roster = RosterImporter::from_path(path)?;
            info!(path = %path.display(), consultants = roster.len(), "roster loaded");
            roster
        }
        None => {
            info!("no roster configured; starting with an empty bench");
            Vec::new()
        }
    };

    Ok(Arc::new(roster))
}
