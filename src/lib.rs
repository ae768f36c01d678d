mod alphabet;
mod decode;
mod encode;
mod error;

pub mod cli;

pub use alphabet::{Alphabet, STANDARD};
pub use decode::decode;
pub use encode::{encode_stream, encode_to_vec, encoded_len};
pub use error::DecodeError;
