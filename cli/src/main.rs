mod cli;
mod error;
mod init;
mod logging;
mod normalize;
mod probe;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use normalize::Mode;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config;

    let result = match cli.command {
        Commands::Extract { input, format } => {
            normalize::execute(&config, Mode::Extract, input, format)
        }
        Commands::Handle { input, format } => {
            normalize::execute(&config, Mode::Handle, input, format)
        }
        Commands::Toast { input } => normalize::execute_toast(&config, input),
        Commands::Probe {
            url,
            method,
            body,
            timeout_seconds,
            fallback,
            format,
        } => probe::execute(
            &config,
            probe::ProbeRequest {
                url,
                method,
                body,
                timeout_seconds,
                fallback,
                format,
            },
        ),
        Commands::Init { force } => init::execute(&config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
