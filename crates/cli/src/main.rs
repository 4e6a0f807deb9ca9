#![forbid(unsafe_code)]

mod cli_input;
mod generate;
mod introspect;

use anyhow::Result;
use clap::Parser;

use crate::cli_input::{Args, Command};

fn main() {
    let exit_code = match try_main() {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn try_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Generate(command) => generate::execute(&command),
        Command::Introspect(command) => introspect::execute(&command),
    }
}
