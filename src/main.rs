//! apinamemap CLI entrypoint

use clap::Parser;

use apinamemap::cli::{is_broken_pipe, Cli};
use apinamemap::output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        // Downstream reader went away (e.g. `| head`); nothing left to report
        if is_broken_pipe(&e) {
            return;
        }
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
