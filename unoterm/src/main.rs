mod command;
mod config;
mod render;
mod session;

use std::io;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use unocore::Uno;

use crate::config::{init_tracing, Args};
use crate::session::Session;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let game = match args.seed {
        Some(seed) => Uno::with_seed(seed)?,
        None => Uno::new()?,
    };
    info!(seed = ?args.seed, "starting session");

    let stdin = io::stdin();
    let mut session = Session::new(game, stdin.lock(), io::stdout(), args.computer_delay());
    session.run()
}
