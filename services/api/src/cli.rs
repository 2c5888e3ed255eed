use crate::demo::{run_demo, run_grid, run_reports, DemoArgs, GridArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruit AI Dashboard",
    about = "Serve and explore the recruiter dashboard for AI-led interviews",
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
    /// Render the interview grid to the terminal
    Grid(GridArgs),
    /// Print report cards for completed interviews
    Reports(ReportArgs),
    /// Run an end-to-end CLI demo covering creation, invites, and reports
    Demo(DemoArgs),
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
        Command::Grid(args) => run_grid(args),
        Command::Reports(args) => run_reports(args),
        Command::Demo(args) => run_demo(args),
    }
}
