use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::args::DecodeArgs;
use crate::cli::read_source;
use crate::decode;

pub fn handle(args: &DecodeArgs) -> Result<()> {
    // Decode must see the whole input to size its output and detect
    // padding, so the source is read fully up front.
    let encoded = read_source(&args.input)?;

    // The output is only opened after a successful decode: a validation
    // failure leaves no created or truncated file behind.
    let decoded = decode(&encoded).context("decode failed")?;

    if args.output == "-" {
        io::stdout()
            .lock()
            .write_all(&decoded)
            .context("cannot write to standard output")?;
    } else {
        fs::write(&args.output, &decoded)
            .with_context(|| format!("cannot create output file '{}'", args.output))?;
        println!("Decoding finished → {}", args.output);
    }

    Ok(())
}
