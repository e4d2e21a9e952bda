//! Command-line interface for `watsan`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::logging;

/// `watsan` (wsn) - Community water & sanitation tracker.
#[derive(Parser, Debug)]
#[command(name = "wsn")]
#[command(
    author,
    version,
    about = "Community water & sanitation tracker (flat JSON files)",
    long_about = None,
    after_help = "Data lives in ./.watsan (override with --dir or WATSAN_DIR)."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Workspace data directory
    #[arg(long, global = true, env = "WATSAN_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a watsan workspace
    Init {
        /// Recreate the workspace even if it exists
        #[arg(long)]
        force: bool,
    },

    /// Manage water-usage surveys
    Survey(SurveyCommand),

    /// Manage issue reports
    Issue(IssueCommand),

    /// Show all surveys and issues
    Data,

    /// Show workspace paths and record counts
    Info,

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct SurveyCommand {
    /// Survey subcommand
    #[command(subcommand)]
    pub command: SurveySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SurveySubcommand {
    /// Submit a water-usage survey
    Add {
        /// Respondent name
        name: String,

        /// Daily water usage in liters (no enforced lower bound)
        #[arg(allow_negative_numbers = true)]
        usage: i64,

        /// Submission time (free-form; generated when omitted)
        #[arg(long, value_name = "TS")]
        timestamp: Option<String>,
    },

    /// Delete a survey by id
    #[command(alias = "rm")]
    Remove {
        /// Survey id
        id: u64,
    },
}

#[derive(Args, Debug)]
pub struct IssueCommand {
    /// Issue subcommand
    #[command(subcommand)]
    pub command: IssueSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IssueSubcommand {
    /// Report a water/sanitation problem
    Report {
        /// Where the problem was observed
        location: String,

        /// Problem description
        problem: String,

        /// Report time (free-form; generated when omitted)
        #[arg(long, value_name = "TS")]
        timestamp: Option<String>,
    },

    /// Delete an issue by id
    #[command(alias = "rm")]
    Remove {
        /// Issue id
        id: u64,
    },
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let dir = cli.dir.as_deref();
    tracing::debug!("Running {:?} (dir override: {:?})", cli.command, dir);
    match cli.command {
        Commands::Init { force } => commands::init::execute(dir, force)?,
        Commands::Survey(survey) => match survey.command {
            SurveySubcommand::Add {
                name,
                usage,
                timestamp,
            } => commands::survey::add(dir, name, usage, timestamp, cli.json)?,
            SurveySubcommand::Remove { id } => commands::survey::remove(dir, id, cli.json)?,
        },
        Commands::Issue(issue) => match issue.command {
            IssueSubcommand::Report {
                location,
                problem,
                timestamp,
            } => commands::issue::report(dir, location, problem, timestamp, cli.json)?,
            IssueSubcommand::Remove { id } => commands::issue::remove(dir, id, cli.json)?,
        },
        Commands::Data => commands::data::execute(dir, cli.json)?,
        Commands::Info => commands::info::execute(dir, cli.json)?,
        Commands::Version => commands::version::execute(cli.json)?,
    }

    Ok(())
}
