mod cli;
mod logging;

use std::io;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(stdin.lock(), stdout.lock())
}
