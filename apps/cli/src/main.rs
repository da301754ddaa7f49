//! # andaz-cart Entry Point
//!
//! ## Exit Codes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   0  success (storage trouble included: the cart falls back to memory)  │
//! │   1  cart error, or any error not raised by a command                   │
//! │   2  bad arguments (clap)                                               │
//! │  65  invalid input (bad price, blank name)                              │
//! │  70  internal error                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use andaz_cli::Cli;
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    andaz_cli::init_tracing();

    let cli = Cli::parse();

    match andaz_cli::run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");

            let failure = andaz_cli::report(&err, cli.json);
            if cli.json {
                println!("{}", failure.output);
            } else {
                eprintln!("{}", failure.output);
            }
            ExitCode::from(failure.exit_code)
        }
    }
}
