//! Streaming lowercase hex encoder and case-insensitive hex decoder.

use std::io::{self, Read, Write};

use crate::constants::{HEX_REVERSE, HEX_TABLE};
use crate::encoder::Encoder;
use crate::error::DecodeError;

/// Raw bytes encoded per call into the wrapped sink.
const CHUNK: usize = 1024;

/// Writes the hex digits of `src` into `dst`, returning the number of bytes
/// written (always `2 * src.len()`).
///
/// # Panics
///
/// Panics if `dst` is shorter than `2 * src.len()`.
pub fn encode_hex_into(src: &[u8], dst: &mut [u8]) -> usize {
    let mut offset = 0;
    for &octet in src {
        let pair = HEX_TABLE[octet as usize];
        dst[offset] = pair[0];
        dst[offset + 1] = pair[1];
        offset += 2;
    }
    offset
}

/// Encodes `src` to lowercase hex.
///
/// # Example
///
/// ```
/// use binrecode_codecs::encode_hex;
///
/// assert_eq!(encode_hex(&[0x00, 0xff]), b"00ff");
/// ```
pub fn encode_hex(src: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; src.len() * 2];
    encode_hex_into(src, &mut out);
    out
}

/// Hex encoder over a byte sink, optionally preceded by a fixed prefix.
pub struct HexEncoder<W> {
    inner: W,
    buf: Box<[u8; CHUNK * 2]>,
}

impl<W: Write> HexEncoder<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Box::new([0u8; CHUNK * 2]),
        }
    }

    /// Writes `prefix` to `inner` right away, then encodes like [`HexEncoder::new`].
    pub fn with_prefix(mut inner: W, prefix: &[u8]) -> io::Result<Self> {
        inner.write_all(prefix)?;
        Ok(Self::new(inner))
    }
}

impl<W: Write> Write for HexEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(CHUNK);
        let len = encode_hex_into(&buf[..n], &mut self.buf[..]);
        self.inner.write_all(&self.buf[..len])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Encoder for HexEncoder<W> {
    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Hex decoder over a byte source.
///
/// Bytes decoded before a malformed digit are yielded first; every later
/// read fails with [`DecodeError::InvalidHexByte`]. A dangling digit at the
/// end of input fails with [`DecodeError::OddLength`] the same way.
pub struct HexDecoder<R> {
    inner: R,
    buf: Box<[u8; CHUNK * 2]>,
    /// High nibble waiting for its partner digit.
    pending: Option<u8>,
    /// Offset of the next digit in the encoded stream.
    offset: u64,
    err: Option<DecodeError>,
}

impl<R: Read> HexDecoder<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Box::new([0u8; CHUNK * 2]),
            pending: None,
            offset: 0,
            err: None,
        }
    }
}

impl<R: Read> Read for HexDecoder<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }
        loop {
            if let Some(err) = &self.err {
                return Err(err.clone().into());
            }

            let want = out.len().saturating_mul(2).min(self.buf.len());
            let n = self.inner.read(&mut self.buf[..want])?;
            if n == 0 {
                if self.pending.take().is_some() {
                    self.err = Some(DecodeError::OddLength);
                    continue;
                }
                return Ok(0);
            }

            let mut written = 0;
            for &digit in &self.buf[..n] {
                let nibble = HEX_REVERSE[digit as usize];
                if nibble < 0 {
                    self.err = Some(DecodeError::InvalidHexByte {
                        byte: digit,
                        offset: self.offset,
                    });
                    break;
                }
                self.offset += 1;
                match self.pending.take() {
                    None => self.pending = Some(nibble as u8),
                    Some(high) => {
                        out[written] = (high << 4) | nibble as u8;
                        written += 1;
                    }
                }
            }

            if written > 0 {
                return Ok(written);
            }
        }
    }
}
