//! `graphematizer-eval <test-set>`

use clap::Parser;
use graphematizer_cli::commands::EvaluateArgs;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = EvaluateArgs::parse();

    match args.execute(&mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
