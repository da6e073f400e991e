use crate::report::{run_checklist, run_export, run_list, run_summary};
use crate::server;
use bench_triage::error::AppError;
use bench_triage::roster::FilterCriteria;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Bench Triage",
    about = "Search, classify, and export the consultant bench roster",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with a roster file from the command line
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Print the consultants matching the filters with their status tiers
    List(ListArgs),
    /// Write the consultants matching the filters as CSV
    Export(ExportArgs),
    /// Print headline counts per status tier
    Summary(RosterArgs),
    /// Print the readiness checklist for one consultant
    Checklist(ChecklistArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Roster file (.csv or .json) to serve; overrides BENCH_ROSTER_PATH
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster file (.csv or .json)
    #[arg(long)]
    pub(crate) roster: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive match against name, email, or id
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    #[arg(long, default_value = "")]
    pub(crate) department: String,
    #[arg(long, default_value = "")]
    pub(crate) skill: String,
    #[arg(long, default_value = "")]
    pub(crate) resume_status: String,
    #[arg(long, default_value = "")]
    pub(crate) training_status: String,
    /// Attendance bucket: excellent, good, average or poor
    #[arg(long, default_value = "")]
    pub(crate) attendance: String,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            search_term: args.search,
            department: args.department,
            skill: args.skill,
            resume_status: args.resume_status,
            training_status: args.training_status,
            attendance_rate: args.attendance,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Destination file; prints to stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ChecklistArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Consultant id
    #[arg(long)]
    pub(crate) id: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster { command } => match command {
            RosterCommand::List(args) => run_list(args),
            RosterCommand::Export(args) => run_export(args),
            RosterCommand::Summary(args) => run_summary(args),
            RosterCommand::Checklist(args) => run_checklist(args),
        },
    }
}
