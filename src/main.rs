use clap::Parser;

mod cli;
mod domain;
mod services;

use cli::Cli;
use domain::models::DeprecationNotice;
use services::{logging, output};

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring command-line arguments");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_notice(&mut out, &DeprecationNotice::current())?;
    Ok(())
}
