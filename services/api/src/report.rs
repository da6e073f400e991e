use crate::cli::{ChecklistArgs, ExportArgs, ListArgs, RosterArgs};
use bench_triage::error::AppError;
use bench_triage::roster::{
    apply, summarize, to_csv, triage, FilterCriteria, RosterImporter, RosterSummary, RosterView,
};
use bench_triage::workflow::{consultant_checklist, project, ConnectorState, ProjectedStep};
use std::io::Write;

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.roster.roster)?;
    let criteria = FilterCriteria::from(args.filters);
    render_roster_view(&triage(&roster, &criteria));
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.roster.roster)?;
    let criteria = FilterCriteria::from(args.filters);
    let subset = apply(&roster, &criteria);
    let csv = to_csv(&subset)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            println!("Exported {} consultants to {}", subset.len(), path.display());
        }
        None => std::io::stdout().write_all(csv.as_bytes())?,
    }

    Ok(())
}

pub(crate) fn run_summary(args: RosterArgs) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.roster)?;
    render_summary(&summarize(&roster));
    Ok(())
}

pub(crate) fn run_checklist(args: ChecklistArgs) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.roster.roster)?;
    match roster.iter().find(|record| record.id == args.id) {
        Some(record) => {
            println!("Readiness checklist for {} ({})", record.name, record.id);
            render_steps(&project(&consultant_checklist(record)));
        }
        None => println!("No consultant with id {} in roster", args.id),
    }
    Ok(())
}

pub(crate) fn render_roster_view(view: &RosterView) {
    if view.has_active_filters {
        println!("Showing {} of {} consultants (filtered)", view.matched, view.total);
    } else {
        println!("Showing all {} consultants", view.total);
    }

    for row in &view.consultants {
        let record = &row.record;
        println!(
            "- {} | {} | {} | {} | resume {} [{}] | training {} [{}] | attendance {:.1}% [{}] | {} opportunities | bench since {}",
            record.id,
            record.name,
            record.email,
            record.department.label(),
            record.resume_status.label(),
            row.resume_tier.as_str(),
            record.training_status.label(),
            row.training_tier.as_str(),
            record.attendance_rate,
            row.attendance_tier.as_str(),
            record.opportunities_count,
            record.bench_start_date,
        );
    }
}

pub(crate) fn render_summary(summary: &RosterSummary) {
    println!("Bench summary");
    println!("- {} consultants on the bench", summary.total);
    println!(
        "- {} with at least one opportunity",
        summary.with_opportunities
    );
    match summary.average_attendance {
        Some(avg) => println!("- Average attendance {:.1}%", avg),
        None => println!("- Average attendance n/a"),
    }

    println!("\nResume status");
    for entry in &summary.resume_tiers {
        println!("- {}: {}", entry.tier_label, entry.count);
    }

    println!("\nTraining status");
    for entry in &summary.training_tiers {
        println!("- {}: {}", entry.tier_label, entry.count);
    }

    println!("\nAttendance");
    for entry in &summary.attendance_tiers {
        println!("- {}: {}", entry.tier_label, entry.count);
    }
}

pub(crate) fn render_steps(steps: &[ProjectedStep]) {
    for projected in steps {
        println!(
            "- {} [{}]",
            projected.step.label,
            projected.visual_state.label()
        );
        if let Some(connector) = projected.connector_state {
            let marker = match connector {
                ConnectorState::Completed => "  ||",
                ConnectorState::Pending => "  ..",
            };
            println!("{marker}");
        }
    }
}
