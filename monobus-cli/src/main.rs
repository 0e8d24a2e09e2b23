//! monobus - single-device I2C access from the command line

mod cli;
mod commands;
mod config;
mod logging;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let outcome = config::resolve(&cli.target)
        .and_then(|config| commands::run(cli.command, &config, cli.target.checked));

    if let Err(err) = outcome {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
