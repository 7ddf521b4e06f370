mod args;
mod logging;
mod plot;
mod runner;

use crate::args::TlsBenchArgs;
use crate::logging::Logging;
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = TlsBenchArgs::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut logging = Logging::new();
    logging.init(!args.no_color, &args.debug)?;

    let kind = args.command.kind();
    info!("Generating {} report...", kind);
    if let Err(error) = runner::run(&args.command) {
        error!("{} report failed: {:#}", kind, error);
        return Err(error);
    }
    info!("Finished the {} report.", kind);
    Ok(())
}
