// ksm: interactive parser REPL

use std::io;

use ksm::repl::{self, ConfigError, ReplConfig, ReplError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("ksm");

    let config = match ReplConfig::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config.with_environment(),
        Err(ConfigError::HelpRequested) => {
            print_usage(program_name);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    match repl::start(stdin.lock(), io::stdout(), &config) {
        Ok(()) => Ok(()),
        // The errors have already been printed by the REPL
        Err(ReplError::Parse(_)) => std::process::exit(1),
        Err(e) => Err(e.into()),
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--no-color] [--prompt <text>]", program_name);
    eprintln!();
    eprintln!("Reads one line at a time from stdin and prints the parsed statements.");
    eprintln!("Exits with status 1 on the first line that fails to parse.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-color       Disable colored output (also: NO_COLOR=1)");
    eprintln!("  --prompt <text>  Prompt shown before each line");
    eprintln!("  -h, --help       Show this message");
}
