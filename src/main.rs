use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use covgroup::cli;
use covgroup::group::GroupBy;
use covgroup::report::Style;

/// Go coverage broken down by host, owner, repository or directory.
#[derive(Parser)]
#[command(name = "covgroup", version, about)]
struct Cli {
    /// Output style.
    #[arg(long, global = true, value_enum, env = "COVGROUP_FORMAT", default_value_t = Style::Text)]
    format: Style,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total line and statement coverage.
    Summary {
        /// Path to the cover profile, or `-` for stdin.
        file: PathBuf,
    },

    /// Show statement coverage grouped by one or more keys.
    Group {
        /// Path to the cover profile, or `-` for stdin.
        file: PathBuf,

        /// Grouping to apply (repeatable).
        #[arg(long, value_enum, default_values_t = [GroupBy::Owner])]
        by: Vec<GroupBy>,

        /// Also print the overall totals.
        #[arg(long)]
        totals: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = match cli.command {
        Commands::Summary { file } => cli::cmd_summary(&cli::read_input(&file)?, cli.format)?,
        Commands::Group { file, by, totals } => {
            cli::cmd_group(&cli::read_input(&file)?, &by, totals, cli.format)?
        }
    };
    print!("{output}");
    Ok(())
}
