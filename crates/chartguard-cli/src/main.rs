use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use chartguard_core::Dialect;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "chartguard",
    version,
    about = "Validate chart requests and generate safe SQL"
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "chartguard_policy=debug")
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Path to a chartguard.yaml configuration file
    #[arg(long, short = 'c', global = true, env = "CHARTGUARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a chart request and print the validated form.
    ///
    /// Exits with status 2 when the request is rejected.
    Validate {
        /// Schema snapshot (.yaml, .yml or .json). Overrides schema_file from the config.
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Request JSON file, or "-" for stdin
        #[arg(long, default_value = "-")]
        request: PathBuf,
    },

    /// Validate a chart request and print the generated SQL.
    ///
    /// Exits with status 2 when the request is rejected.
    Build {
        /// Schema snapshot (.yaml, .yml or .json). Overrides schema_file from the config.
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Request JSON file, or "-" for stdin
        #[arg(long, default_value = "-")]
        request: PathBuf,

        /// Target dialect: bracket (SQL Server) or quoted (SQLite, Postgres)
        #[arg(long)]
        dialect: Option<Dialect>,
    },

    /// List the tables of a schema snapshot.
    Schema {
        /// Schema snapshot (.yaml, .yml or .json). Overrides schema_file from the config.
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Validate { schema, request } => {
            commands::validate::run(&config, schema.as_deref(), &request)
        }
        Command::Build {
            schema,
            request,
            dialect,
        } => commands::build::run(&config, schema.as_deref(), &request, dialect),
        Command::Schema { schema } => {
            commands::schema::run(&config, schema.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
