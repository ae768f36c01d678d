pub mod args;
mod handlers;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use args::{Cli, Command};

pub fn run() -> Result<()> {
    // Usage errors exit with status 1, not clap's default 2. Help and
    // version output still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(&args),
        Command::Decode(args) => handlers::decode::handle(&args),
    }
}

/// Reads an entire input source into memory: a file, or stdin for `-`.
pub(crate) fn read_source(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("cannot read standard input")?;
        Ok(buffer)
    } else {
        std::fs::read(input).with_context(|| format!("cannot open input file '{input}'"))
    }
}
