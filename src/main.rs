use clap::Parser;
use std::process;
use tag_ctl::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    match tag_ctl::run_command(cli) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
