use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quartet")]
#[command(version)]
#[command(
    about = "Base64 encode or decode files",
    after_help = "Use '-' for INPUT or OUTPUT to read standard input / write standard output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode binary data to base64 text
    Encode(EncodeArgs),
    /// Decode base64 text back to binary data
    Decode(DecodeArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file ('-' for stdin)
    pub input: String,

    /// Output file ('-' for stdout)
    pub output: String,

    /// Insert a line break after every COLS output symbols (0 = no wrapping)
    #[arg(long, value_name = "COLS", default_value_t = 0)]
    pub wrap: usize,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file ('-' for stdin)
    pub input: String,

    /// Output file ('-' for stdout)
    pub output: String,
}
