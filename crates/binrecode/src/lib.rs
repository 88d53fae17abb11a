//! binrecode — recode a byte stream from one encoding to another.
//!
//! The formats themselves live in `binrecode-codecs`; this crate chains a
//! decoder and an encoder around a stream copy ([`transform`]) and carries the
//! command-line glue ([`cli`]).

pub mod cli;
mod error;
mod transform;

pub use binrecode_codecs::{DecodeError, DecodeFormat, EncodeFormat};
pub use error::{RecodeError, Side};
pub use transform::transform;
