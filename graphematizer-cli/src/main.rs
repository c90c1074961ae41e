//! `graphematizer <plaintext> <graphemes>`

use graphematizer_cli::commands::process::{ParseOutcome, ProcessArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match ProcessArgs::parse_from_env() {
        Ok(args) => args,
        Err(ParseOutcome::Informational(info)) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Err(ParseOutcome::Invalid(error)) => {
            eprintln!("{error}");
            return ExitCode::from(error.exit_code());
        }
    };

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
