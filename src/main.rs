use std::process::ExitCode;

use clap::Parser;

use zeroth::cli::{list_functions, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        print!("{}", list_functions());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(summary) => {
            print!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
