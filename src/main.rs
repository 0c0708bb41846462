mod cli;
mod collect;
mod engine;
mod error;
mod report;
mod types;

use std::collections::HashMap;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{AnalyzeCommand, CheckLimitCommand};
use crate::collect::github::GithubCollector;
use crate::engine::counter::ContributionCounter;
use crate::engine::Scoreboard;
use crate::error::ReposcoreError;
use crate::types::counts::ParticipantCounts;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ReposcoreError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => analyze(&cmd),
        cli::Commands::CheckLimit(cmd) => check_limit(&cmd),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}

fn resolve_token(flag: Option<&str>) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Table => report::OutputFormat::Table,
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Chart => report::OutputFormat::Chart,
        cli::ReportFormat::Both => report::OutputFormat::Both,
    }
}

fn analyze(cmd: &AnalyzeCommand) -> Result<i32, ReposcoreError> {
    let repositories = collect::normalize_repo_args(&cmd.repositories);
    if repositories.is_empty() {
        return Err(ReposcoreError::InvalidRepoFormat(String::new()));
    }
    for repo in &repositories {
        collect::validate_repo_format(repo)?;
    }

    let token = resolve_token(cmd.token.as_deref());
    let format = output_format(cmd.format);
    let aliases = match &cmd.user_info {
        Some(path) => Some(collect::load_user_info(path)?),
        None => None,
    };
    std::fs::create_dir_all(&cmd.output)?;

    let mut exit = exit_code::SUCCESS;
    let mut overall = ContributionCounter::new();
    for repo in &repositories {
        let counts = gather_counts(cmd, repo, token.as_deref(), &mut exit)?;

        overall.merge(&ContributionCounter::from_counts(counts.clone()));

        let counts = match &aliases {
            Some(aliases) => collect::apply_aliases(counts, aliases),
            None => counts,
        };
        let board = Scoreboard::from_counts(&counts);
        if board.is_empty() {
            warn!(repo = %repo, "no participant data collected; result files will be empty");
            exit = exit.max(exit_code::WARNINGS);
        }

        let repo_dir = cmd.output.join(repo.replace('/', "_"));
        let written = report::write_all(&board, &repo_dir, format, cmd.min_score)?;
        info!(repo = %repo, dir = %repo_dir.display(), files = written.len(), "results saved");

        if let Some(user) = &cmd.user {
            print_user_summary(&board, &aliases, user);
        }
    }

    if repositories.len() > 1 {
        let counts = match &aliases {
            Some(aliases) => collect::apply_aliases(overall.into_counts(), aliases),
            None => overall.into_counts(),
        };
        let board = Scoreboard::from_counts(&counts);
        let overall_dir = cmd.output.join("overall");
        let written = report::write_all(&board, &overall_dir, format, cmd.min_score)?;
        info!(dir = %overall_dir.display(), files = written.len(), "combined results saved");

        if let Some(user) = &cmd.user {
            print_user_summary(&board, &aliases, user);
        }
    }

    Ok(exit)
}

/// Loads a repository's tallies from the cache when requested and present,
/// otherwise collects from the API and refreshes the cache.
fn gather_counts(
    cmd: &AnalyzeCommand,
    repo: &str,
    token: Option<&str>,
    exit: &mut i32,
) -> Result<HashMap<String, ParticipantCounts>, ReposcoreError> {
    let cache_path = collect::cache::cache_path(&cmd.output, repo);
    if cmd.use_cache && cache_path.exists() {
        let cache = collect::cache::load(&cache_path)?;
        info!(repo = %repo, updated = %cache.update_time, "loaded participant data from cache");
        return Ok(cache.participants);
    }
    if cmd.use_cache {
        info!(repo = %repo, "no cache file found, collecting from the GitHub API");
    }

    let collector = GithubCollector::new(repo, token)?;
    let records = collector.collect()?;
    let mut counter = ContributionCounter::new();
    let skipped = counter.observe_all(&records);
    if skipped > 0 {
        warn!(repo = %repo, skipped, "records skipped during counting");
        *exit = (*exit).max(exit_code::WARNINGS);
    }

    let counts = counter.into_counts();
    let cache = collect::cache::CacheFile::new(counts.clone());
    collect::cache::store(&cache_path, &cache)?;
    Ok(counts)
}

/// Prints one participant's score and rank. A participant absent from the
/// scoreboard has all-zero counts rather than being an error.
fn print_user_summary(
    board: &Scoreboard,
    aliases: &Option<HashMap<String, String>>,
    user: &str,
) {
    let lookup = aliases
        .as_ref()
        .and_then(|aliases| aliases.get(user).cloned())
        .unwrap_or_else(|| user.to_string());
    match board.rank_of(&lookup) {
        Ok(rank) => {
            let result = board.get_or_zero(&lookup);
            println!("user: {lookup}");
            println!("score: {}", result.score);
            println!("rank: {rank} of {}", board.len());
        }
        Err(_) => {
            println!("user: {lookup}");
            println!("score: 0 (no recorded contributions)");
        }
    }
}

fn check_limit(cmd: &CheckLimitCommand) -> Result<i32, ReposcoreError> {
    let token = resolve_token(cmd.token.as_deref());
    let pool = collect::github::rate_limit(token.as_deref())?;
    println!(
        "rate limit: {} of {} requests remaining",
        pool.remaining, pool.limit
    );
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
