use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repomap::cli::commands;
use repomap::types::{ExplainMode, RepoRef, ReportMode};

/// Parse a repository reference from string
fn parse_repo_ref(s: &str) -> Result<RepoRef, String> {
    s.parse().map_err(|e: repomap::RepoMapError| e.to_string())
}

/// Parse an explain mode from string
fn parse_explain_mode(s: &str) -> Result<ExplainMode, String> {
    s.parse()
}

/// Parse a report mode from string
fn parse_report_mode(s: &str) -> Result<ReportMode, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "repomap")]
#[command(
    version,
    about = "AI-assisted repository structure mapper and explainer for GitHub"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a repository's structure as a Mermaid mindmap
    Map {
        #[arg(value_parser = parse_repo_ref, help = "Repository as owner/name or a github.com URL")]
        repo: RepoRef,
        #[arg(
            long = "ref",
            short = 'r',
            help = "Branch, tag or commit (default: the repository's default branch)"
        )]
        reference: Option<String>,
        #[arg(long, help = "Soft cap on emitted nodes")]
        max_nodes: Option<usize>,
        #[arg(long, help = "Maximum path depth shown")]
        max_depth: Option<usize>,
        #[arg(long, short, help = "Write the diagram to a file")]
        output: Option<PathBuf>,
    },

    /// Classify the repository's architecture pattern
    Arch {
        #[arg(value_parser = parse_repo_ref, help = "Repository as owner/name or a github.com URL")]
        repo: RepoRef,
        #[arg(long = "ref", short = 'r', help = "Branch, tag or commit")]
        reference: Option<String>,
    },

    /// Explain a single file for a chosen audience
    Explain {
        #[arg(value_parser = parse_repo_ref, help = "Repository as owner/name or a github.com URL")]
        repo: RepoRef,
        #[arg(help = "File path inside the repository")]
        path: String,
        #[arg(long, value_parser = parse_explain_mode, default_value = "beginner", help = "Audience: beginner, advanced")]
        mode: ExplainMode,
    },

    /// Generate a Markdown analysis report
    Report {
        #[arg(value_parser = parse_repo_ref, help = "Repository as owner/name or a github.com URL")]
        repo: RepoRef,
        #[arg(long = "ref", short = 'r', help = "Branch, tag or commit")]
        reference: Option<String>,
        #[arg(long, value_parser = parse_report_mode, default_value = "basic", help = "Depth: basic, advanced")]
        mode: ReportMode,
        #[arg(long, short, help = "Write the report to a file")]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show,
    /// Show configuration file paths
    Path,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let rt = Runtime::new()?;

    match cli.command {
        Commands::Map {
            repo,
            reference,
            max_nodes,
            max_depth,
            output,
        } => {
            rt.block_on(commands::map::run(
                &repo,
                commands::map::MapOptions {
                    reference,
                    max_nodes,
                    max_depth,
                    output,
                },
            ))?;
        }
        Commands::Arch { repo, reference } => {
            rt.block_on(commands::arch::run(&repo, reference.as_deref()))?;
        }
        Commands::Explain { repo, path, mode } => {
            rt.block_on(commands::explain::run(&repo, &path, mode))?;
        }
        Commands::Report {
            repo,
            reference,
            mode,
            output,
        } => {
            rt.block_on(commands::report::run(
                &repo,
                reference.as_deref(),
                mode,
                output,
            ))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show()?,
            ConfigAction::Path => commands::config::path(),
        },
    }

    Ok(())
}
