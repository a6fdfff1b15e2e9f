use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rolefit",
    version,
    about = "Role-fit scoring for job-seeker profiles"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding rolefit.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate against one role
    Score(ScoreCommand),
    /// Score a candidate against every known role, best fit first
    Rank(RankCommand),
    /// Re-score after a hypothetical profile change
    Simulate(SimulateCommand),
    /// List known roles
    Roles,
    /// Validate configuration
    Check,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Candidate profile JSON
    pub candidate: PathBuf,
    #[arg(long)]
    pub role: String,
    /// Resume parser output JSON
    #[arg(long)]
    pub resume: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RankCommand {
    pub candidate: PathBuf,
    #[arg(long)]
    pub resume: Option<PathBuf>,
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["add_skill", "add_project", "add_experience"])
))]
pub struct SimulateCommand {
    pub candidate: PathBuf,
    #[arg(long = "role", required = true)]
    pub roles: Vec<String>,
    #[arg(long)]
    pub resume: Option<PathBuf>,
    /// Skill to add, as Name:Level
    #[arg(long)]
    pub add_skill: Option<String>,
    /// Project to add, as Complexity
    #[arg(long)]
    pub add_project: Option<String>,
    /// Tech stack for --add-project, comma separated
    #[arg(long, requires = "add_project")]
    pub tech: Option<String>,
    /// Experience to add, as Type:duration
    #[arg(long)]
    pub add_experience: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
