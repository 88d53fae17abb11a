//! Name lookup over the encoder and decoder tables.
//!
//! The two tables are independent: `0xhex`, `rhex` and `go` can only be
//! written, never read.

use crate::format::{DecodeFormat, EncodeFormat};

/// Finds the decoder registered under `name`. Names are matched exactly.
pub fn lookup_decoder(name: &str) -> Option<DecodeFormat> {
    name.parse().ok()
}

/// Finds the encoder registered under `name`. Names are matched exactly.
pub fn lookup_encoder(name: &str) -> Option<EncodeFormat> {
    name.parse().ok()
}

/// Registered decoder names in byte order.
pub fn decoder_names() -> Vec<&'static str> {
    let mut names: Vec<_> = DecodeFormat::ALL.iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names
}

/// Registered encoder names in byte order.
pub fn encoder_names() -> Vec<&'static str> {
    let mut names: Vec<_> = EncodeFormat::ALL.iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names
}
