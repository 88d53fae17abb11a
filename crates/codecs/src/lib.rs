//! Streaming encoders and decoders for binrecode.
//!
//! Every format is a thin adapter over `std::io`:
//! - decoders wrap a [`std::io::Read`] and yield decoded bytes lazily,
//! - encoders wrap a [`std::io::Write`] and must be [finished](Encoder::finish)
//!   to flush trailing state.
//!
//! Formats are looked up by name through [`lookup_encoder`] and
//! [`lookup_decoder`].
//!
//! # Example
//!
//! ```
//! use std::io::{Read, Write};
//! use binrecode_codecs::{lookup_decoder, lookup_encoder, Encoder};
//!
//! let mut out = Vec::new();
//! let mut enc = lookup_encoder("base64").unwrap().encoder(&mut out).unwrap();
//! enc.write_all(b"test").unwrap();
//! enc.finish().unwrap();
//! drop(enc);
//! assert_eq!(out, b"dGVzdA==");
//!
//! let mut decoded = Vec::new();
//! lookup_decoder("base64")
//!     .unwrap()
//!     .decoder(&out[..])
//!     .read_to_end(&mut decoded)
//!     .unwrap();
//! assert_eq!(decoded, b"test");
//! ```

mod base64_stream;
mod constants;
mod encoder;
mod error;
mod format;
mod go_slice;
mod hex;
mod registry;
mod reverse_hex;

pub use base64_stream::{Base64Decoder, Base64Encoder, Base64Variant, LineBreakFilter};
pub use constants::{GO_BYTES_PER_LINE, GO_SLICE_CLOSE, GO_SLICE_OPEN, HEX_DIGITS, HEX_PREFIX};
pub use encoder::{Encoder, RawEncoder};
pub use error::{DecodeError, UnknownFormat};
pub use format::{DecodeFormat, EncodeFormat};
pub use go_slice::GoSliceEncoder;
pub use hex::{encode_hex, encode_hex_into, HexDecoder, HexEncoder};
pub use registry::{decoder_names, encoder_names, lookup_decoder, lookup_encoder};
pub use reverse_hex::ReverseHexEncoder;
