// src/main.rs
use std::process::ExitCode;

use verbump::{bootstrap, cli, config::Config, logging};

fn main() -> ExitCode {
    let config = Config::from(cli::parse());
    logging::init_logging(config.log_level);

    match bootstrap::run_with_config(&config) {
        Ok(outcome) => {
            if !config.quiet {
                println!("{}", outcome.version);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
