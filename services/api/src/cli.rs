use crate::demo::{run_demo, run_grade_import, DemoArgs, GradeImportArgs};
use crate::server;
use abirechner::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Abirechner",
    about = "Demonstrate and run the Abitur prognosis service from the command line",
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
    /// Work with grade sheet exports
    Grades {
        #[command(subcommand)]
        command: GradesCommand,
    },
    /// Run an end-to-end CLI demo covering selection checks and the prognosis
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum GradesCommand {
    /// Import a grade sheet CSV and print the recorded marks
    Import(GradeImportArgs),
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
        Command::Grades {
            command: GradesCommand::Import(args),
        } => run_grade_import(args),
        Command::Demo(args) => run_demo(args),
    }
}
