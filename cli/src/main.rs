mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use hello_common::{config::Config, greeting};
use terminal::logging;
use tracing::trace;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config::default();
    logging::init_logging(&cfg);
    trace!(count = commands.ignored.len(), "ignoring command line arguments");

    let mut stdout = io::stdout().lock();
    greeting::run(&mut stdout)?;
    Ok(())
}
