use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::{Context, Result};

use crate::cli::args::EncodeArgs;
use crate::encode::encode_stream;

pub fn handle(args: &EncodeArgs) -> Result<()> {
    let mut reader: Box<dyn Read> = if args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("cannot open input file '{}'", args.input))?;
        Box::new(BufReader::new(file))
    };

    if args.output == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        encode_stream(&mut reader, args.wrap, &mut out)
            .context("cannot write to standard output")?;
        out.flush().context("cannot write to standard output")?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("cannot create output file '{}'", args.output))?;
        let mut out = BufWriter::new(file);
        encode_stream(&mut reader, args.wrap, &mut out)
            .with_context(|| format!("cannot write to output file '{}'", args.output))?;
        out.flush()
            .with_context(|| format!("cannot write to output file '{}'", args.output))?;
        println!("Encoding finished → {}", args.output);
    }

    Ok(())
}
