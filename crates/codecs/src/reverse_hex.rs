use std::io::{self, Write};

use crate::encoder::Encoder;
use crate::hex::encode_hex;

/// Buffers all input and, on finish, writes its hex encoding with the
/// character order reversed. The digits are reversed, not the bytes, so
/// `0x12` comes out as `21`.
pub struct ReverseHexEncoder<W> {
    inner: W,
    pending: Vec<u8>,
    finished: bool,
}

impl<W: Write> ReverseHexEncoder<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: Vec::new(),
            finished: false,
        }
    }
}

impl<W: Write> Write for ReverseHexEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    /// Nothing can be written before finish, so this only flushes the sink.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Encoder for ReverseHexEncoder<W> {
    fn finish(&mut self) -> io::Result<()> {
        if !self.finished {
            self.finished = true;
            let mut encoded = encode_hex(&self.pending);
            encoded.reverse();
            self.pending = Vec::new();
            self.inner.write_all(&encoded)?;
        }
        self.inner.flush()
    }
}
