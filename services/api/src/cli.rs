use crate::calculate::{run_calculate, run_crops, CalculateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use orc_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ORC Calculator",
    about = "Calculate Owner Reimbursement Costs for crops destroyed under a response plan",
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
    /// Calculate the ORC for a crop record stored as JSON
    Calculate(CalculateArgs),
    /// List the crops known to the calculator and the formula each uses
    Crops,
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
        Command::Calculate(args) => run_calculate(args),
        Command::Crops => {
            run_crops();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["orc"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn calculate_accepts_crop_override() {
        let cli = Cli::try_parse_from([
            "orc",
            "calculate",
            "--input",
            "record.json",
            "--crop",
            "barley",
            "--csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Calculate(args)) => {
                assert_eq!(args.crop.as_deref(), Some("barley"));
                assert!(args.csv);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
