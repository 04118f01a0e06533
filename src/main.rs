use std::process::ExitCode;

use clap::Parser;
use squadsolver::application::squad::SquadOutcome;
use squadsolver::cli::{self, output, CheckCommand, Cli, Commands};

/// Exit status when the constraints admit no squad.
const EXIT_INFEASIBLE: u8 = 2;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Optimize(args) => cli::optimize::execute(&args).map(|outcome| match outcome {
            SquadOutcome::Optimal { .. } => ExitCode::SUCCESS,
            SquadOutcome::Infeasible => ExitCode::from(EXIT_INFEASIBLE),
        }),
        Commands::Check(CheckCommand::Config(arg)) => {
            cli::check::execute_config(&arg.config).map(|()| ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
