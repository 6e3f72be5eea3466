use clap::Parser;
use quotelist::cli::commands::Cli;
use quotelist::cli::handlers;
use quotelist::logging::{self, LogTarget};

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file
    let target = if cli.command.is_none() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(target);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
