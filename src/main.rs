mod cli;
mod commands;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();

    shared::logging::init();

    commands::export::run()
}
