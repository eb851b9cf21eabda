//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tourmate_cli::CliError;

fn main() {
    match tourmate_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("tourmate: {err}");
            std::process::exit(1);
        }
    }
}
