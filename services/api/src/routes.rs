use crate::infra::{AppState, SharedRoster};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use bench_triage::error::AppError;
use bench_triage::roster::{summarize, to_csv, triage, FilterCriteria, RosterSummary, RosterView};
use bench_triage::workflow::{consultant_checklist, project, ProjectedStep, WorkflowStep};
use serde_json::json;
use tracing::{debug, info};

const EXPORT_FILENAME: &str = "bench-roster.csv";

/// Roster triage endpoints backed by a read-only roster snapshot.
pub(crate) fn roster_router(roster: SharedRoster) -> Router {
    Router::new()
        .route("/api/v1/consultants", get(list_handler))
        .route("/api/v1/consultants/export", get(export_handler))
        .route("/api/v1/consultants/summary", get(summary_handler))
        .route("/api/v1/consultants/:id/checklist", get(checklist_handler))
        .route("/api/v1/workflow/project", post(project_handler))
        .with_state(roster)
}

pub(crate) fn with_operational_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_handler(
    State(roster): State<SharedRoster>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<RosterView> {
    let view = triage(&roster, &criteria);
    debug!(
        total = view.total,
        matched = view.matched,
        active = view.has_active_filters,
        "roster filtered"
    );
    Json(view)
}

pub(crate) async fn export_handler(
    State(roster): State<SharedRoster>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Response, AppError> {
    let subset = bench_triage::roster::apply(&roster, &criteria);
    let body = to_csv(&subset)?;
    info!(rows = subset.len(), "roster export issued");

    let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

pub(crate) async fn summary_handler(State(roster): State<SharedRoster>) -> Json<RosterSummary> {
    Json(summarize(&roster))
}

pub(crate) async fn checklist_handler(
    State(roster): State<SharedRoster>,
    Path(consultant_id): Path<String>,
) -> Response {
    match roster.iter().find(|record| record.id == consultant_id) {
        Some(record) => {
            let steps = project(&consultant_checklist(record));
            (StatusCode::OK, Json(steps)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("consultant {consultant_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn project_handler(Json(steps): Json<Vec<WorkflowStep>>) -> Json<Vec<ProjectedStep>> {
    Json(project(&steps))
}
