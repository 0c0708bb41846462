use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reposcore",
    version,
    about = "Contribution scoring CLI for GitHub course repositories"
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
    CheckLimit(CheckLimitCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Repositories to analyze ('owner/repo'); separate several with
    /// spaces or commas
    #[arg(required = true, value_name = "owner/repo")]
    pub repositories: Vec<String>,

    /// Directory where result files are written
    #[arg(long, default_value = "results")]
    pub output: PathBuf,

    /// Output format for the result files
    #[arg(short, long, value_enum, default_value = "both")]
    pub format: ReportFormat,

    /// GitHub personal access token (or set GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Load participant data from the per-repo cache instead of the API
    #[arg(long)]
    pub use_cache: bool,

    /// JSON file mapping GitHub logins to display names
    #[arg(long)]
    pub user_info: Option<PathBuf>,

    /// Only report participants with at least this total score
    #[arg(long, default_value_t = 1)]
    pub min_score: u64,

    /// Print the score and rank of one participant
    #[arg(long, value_name = "username")]
    pub user: Option<String>,
}

#[derive(Args)]
pub struct CheckLimitCommand {
    /// GitHub personal access token (or set GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Table,
    Text,
    Chart,
    Both,
}
