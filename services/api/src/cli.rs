use crate::demo::{run_analyze, run_audit, AnalyzeArgs, AuditArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use creator_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Creator SEO Coach",
    about = "Score video metadata and audit channels from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single video's metadata and print the report
    Analyze(AnalyzeArgs),
    /// Audit a whole channel from a Studio metadata CSV export
    Audit(AuditArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Audit(args) => run_audit(args),
    }
}
