//! The closed set of encode and decode formats.

use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;

use crate::base64_stream::{Base64Decoder, Base64Encoder, Base64Variant};
use crate::constants::HEX_PREFIX;
use crate::encoder::{Encoder, RawEncoder};
use crate::error::UnknownFormat;
use crate::go_slice::GoSliceEncoder;
use crate::hex::{HexDecoder, HexEncoder};
use crate::reverse_hex::ReverseHexEncoder;

/// A format that raw bytes can be encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeFormat {
    /// `raw`: bytes as they are.
    Raw,
    /// `hex`: lowercase hex, no separators.
    Hex,
    /// `0xhex`: `0x` followed by lowercase hex.
    PrefixedHex,
    /// `rhex`: lowercase hex with the digit order reversed.
    ReversedHex,
    /// `go`: a Go `[]byte{...}` literal.
    GoSlice,
    Base64(Base64Variant),
}

impl EncodeFormat {
    pub const ALL: [EncodeFormat; 9] = [
        EncodeFormat::Raw,
        EncodeFormat::Hex,
        EncodeFormat::PrefixedHex,
        EncodeFormat::ReversedHex,
        EncodeFormat::GoSlice,
        EncodeFormat::Base64(Base64Variant::Standard),
        EncodeFormat::Base64(Base64Variant::StandardNoPad),
        EncodeFormat::Base64(Base64Variant::UrlSafe),
        EncodeFormat::Base64(Base64Variant::UrlSafeNoPad),
    ];

    pub fn name(self) -> &'static str {
        match self {
            EncodeFormat::Raw => "raw",
            EncodeFormat::Hex => "hex",
            EncodeFormat::PrefixedHex => "0xhex",
            EncodeFormat::ReversedHex => "rhex",
            EncodeFormat::GoSlice => "go",
            EncodeFormat::Base64(variant) => variant.name(),
        }
    }

    /// Wraps `out` in this format's encoder.
    ///
    /// `0xhex` and `go` write their opening literal here, so this can fail
    /// with the sink's error.
    pub fn encoder<'a, W: Write + 'a>(self, out: W) -> io::Result<Box<dyn Encoder + 'a>> {
        let encoder: Box<dyn Encoder + 'a> = match self {
            EncodeFormat::Raw => Box::new(RawEncoder::new(out)),
            EncodeFormat::Hex => Box::new(HexEncoder::new(out)),
            EncodeFormat::PrefixedHex => Box::new(HexEncoder::with_prefix(out, HEX_PREFIX)?),
            EncodeFormat::ReversedHex => Box::new(ReverseHexEncoder::new(out)),
            EncodeFormat::GoSlice => Box::new(GoSliceEncoder::new(out)?),
            EncodeFormat::Base64(variant) => Box::new(Base64Encoder::new(out, variant)),
        };
        Ok(encoder)
    }
}

impl fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodeFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncodeFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// A format that can be decoded back to raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeFormat {
    Raw,
    Hex,
    Base64(Base64Variant),
}

impl DecodeFormat {
    pub const ALL: [DecodeFormat; 6] = [
        DecodeFormat::Raw,
        DecodeFormat::Hex,
        DecodeFormat::Base64(Base64Variant::Standard),
        DecodeFormat::Base64(Base64Variant::StandardNoPad),
        DecodeFormat::Base64(Base64Variant::UrlSafe),
        DecodeFormat::Base64(Base64Variant::UrlSafeNoPad),
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecodeFormat::Raw => "raw",
            DecodeFormat::Hex => "hex",
            DecodeFormat::Base64(variant) => variant.name(),
        }
    }

    /// Wraps `input` in this format's decoder. Nothing is read until the
    /// returned source is.
    pub fn decoder<'a, R: Read + 'a>(self, input: R) -> Box<dyn Read + 'a> {
        let decoder: Box<dyn Read + 'a> = match self {
            DecodeFormat::Raw => Box::new(input),
            DecodeFormat::Hex => Box::new(HexDecoder::new(input)),
            DecodeFormat::Base64(variant) => Box::new(Base64Decoder::new(input, variant)),
        };
        decoder
    }
}

impl fmt::Display for DecodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecodeFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecodeFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
