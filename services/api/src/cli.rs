use crate::demo::{run_demo, run_history_report, DemoArgs, HistoryReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ironforge::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IronForge",
    about = "Run the IronForge progression service or exercise it from the command line",
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
    /// Run a seeded end-to-end demo of a training week
    Demo(DemoArgs),
    /// Work with training-log exports
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Summarize a CSV training log: streak, bonuses, and today's grind state
    Report(HistoryReportArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::History {
            command: HistoryCommand::Report(args),
        } => run_history_report(args),
    }
}
