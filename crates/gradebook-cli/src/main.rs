//! gradebook CLI — edit and review student grades from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::edit::Edit;
use commands::Target;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Edit and review student grades")]
struct Cli {
    /// Gradebook TOML file (defaults to the configured gradebook)
    #[arg(long, global = true)]
    gradebook: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text, markdown, json
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a student's grade sheet
    Show {
        /// Student ID
        #[arg(long)]
        student: String,
    },

    /// Set a grade, clamped to the test's range
    Set {
        /// Student ID
        #[arg(long)]
        student: String,

        /// Test ID
        #[arg(long)]
        test: String,

        /// New grade (non-numeric input counts as 0)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Raise a grade by one
    Inc {
        /// Student ID
        #[arg(long)]
        student: String,

        /// Test ID
        #[arg(long)]
        test: String,

        /// Number of steps
        #[arg(long, default_value = "1")]
        times: u32,
    },

    /// Lower a grade by one
    Dec {
        /// Student ID
        #[arg(long)]
        student: String,

        /// Test ID
        #[arg(long)]
        test: String,

        /// Number of steps
        #[arg(long, default_value = "1")]
        times: u32,
    },

    /// Validate a gradebook file
    Validate,

    /// Create starter config and example gradebook
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let target = Target {
        gradebook: cli.gradebook,
        config: cli.config,
        format: cli.format,
    };

    let result = match cli.command {
        Commands::Show { student } => commands::show::execute(student, target),
        Commands::Set {
            student,
            test,
            value,
        } => commands::edit::execute(student, test, Edit::Set(value), target),
        Commands::Inc {
            student,
            test,
            times,
        } => commands::edit::execute(student, test, Edit::Increment(times), target),
        Commands::Dec {
            student,
            test,
            times,
        } => commands::edit::execute(student, test, Edit::Decrement(times), target),
        Commands::Validate => commands::validate::execute(target),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
