// src/bin/cli.rs
use clap::Parser;
use wq_qotd::{ cli, log::{ self, LogOptions } };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    log::init(&LogOptions::from_verbosity(args.verbose));
    cli::run(args)
}
