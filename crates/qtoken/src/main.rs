use clap::{Parser, Subcommand};
use qtoken::commands::{run_inspect, run_schema, run_sort, SchemaKind};
use qtoken::{logging, OutputFormat, QtokenConfig};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

/// qtoken - inspect and order qualified IL tokens
#[derive(Parser)]
#[command(name = "qtoken")]
#[command(about = "Inspect, validate and order qualified IL tokens", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a qtoken.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `qtoken_core=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Decompose tokens into package, module, member and type structure
    Inspect {
        /// Tokens to inspect
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Print a token listing (one per line) in canonical order
    Sort {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Drop duplicate tokens
        #[arg(short, long)]
        unique: bool,
        /// Only check that the listing is already sorted
        #[arg(long)]
        check: bool,
    },
    /// Generate JSON Schema for a token encoding
    Schema {
        /// Which encoding to describe
        #[arg(value_enum, default_value = "token")]
        kind: SchemaKind,
        /// Output file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Application session for the qtoken CLI
#[derive(Clone)]
struct QtokenSession {
    command: Commands,
    format: OutputFormat,
}

#[async_trait::async_trait]
impl AppSession for QtokenSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Inspect { tokens } => run_inspect(tokens.clone(), self.format),
            Commands::Sort {
                input,
                unique,
                check,
            } => run_sort(input.clone(), *unique, *check, self.format),
            Commands::Schema { kind, output } => run_schema(*kind, output.clone()),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = QtokenConfig::resolve(cli.config.as_deref(), &cwd)?;
    logging::init(cli.log_level.as_deref(), &config.logging);

    let session = QtokenSession {
        command: cli.command,
        format: cli.format.unwrap_or(config.output.format),
    };

    let exit_code = App::default()
        .run(
            session,
            |mut session| async move { session.execute().await },
        )
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
