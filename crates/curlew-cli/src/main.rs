#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod logging;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "curlew")]
#[command(author, version, about = "Build configuration assembler for typed front-end projects", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Resolve and emit the build configuration
    Config {
        /// Assemble for a production bundle (development is the default)
        #[arg(short, long)]
        production: bool,

        /// Backend API port (overrides CURLEW_API_PORT)
        #[arg(long, value_name = "PORT")]
        api_port: Option<u16>,

        /// Vendored-dependency directory skipped by the script rule
        #[arg(long, value_name = "DIR", default_value = curlew_core::DEFAULT_EXCLUDE_DIR)]
        exclude_dir: String,

        /// Write the JSON document to a file instead of stdout
        #[arg(short = 'o', long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json);

    let cwd = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().into_diagnostic()?,
    };

    match cli.command {
        Commands::Version => commands::version::run(cli.json),
        Commands::Config {
            production,
            api_port,
            exclude_dir,
            out,
        } => commands::config::run(&commands::config::ConfigAction {
            cwd,
            production,
            api_port,
            exclude_dir,
            out,
            json: cli.json,
        }),
    }
}
