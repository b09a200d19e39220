use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use must_gpa::batch::BatchJob;
use must_gpa::cli::render::error_line;
use must_gpa::cli::{main_menu, run_and_report, BatchRunner};
use must_gpa::AppConfig;

/// Download MUST GPA charts and bind them into a PDF.
///
/// Without a subcommand an interactive menu is shown.
#[derive(Parser)]
#[command(name = "must-gpa-cli", version)]
struct Cli {
    /// Directory for the generated PDF (defaults to ~/MUST_GPA)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Comma-separated roll numbers, e.g. "FA21-BCE-001,FA21-BCE-007"
    List {
        roll_numbers: String,
        /// PDF name; defaults to the roll number when only one is given
        #[arg(long, short)]
        name: Option<String>,
    },
    /// Every roll number from FIRST to LAST inclusive
    Range {
        first: String,
        last: String,
        /// PDF name, usually the class name
        #[arg(long, short)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    let runner = BatchRunner::from_config(&config).context("failed to set up chart fetcher")?;

    let job = match cli.command {
        None => return main_menu(&runner).await,
        Some(Command::List { roll_numbers, name }) => BatchJob::from_list(&roll_numbers, name.as_deref()),
        Some(Command::Range { first, last, name }) => BatchJob::from_range(&first, &last, &name),
    };

    let succeeded = match job {
        Ok(job) => run_and_report(&runner, &job).await,
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string()));
            false
        }
    };
    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
