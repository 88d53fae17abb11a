//! Encoder producing a Go `[]byte{...}` literal.

use std::io::{self, Write};

use crate::constants::{GO_BYTES_PER_LINE, GO_SLICE_CLOSE, GO_SLICE_OPEN, HEX_TABLE};
use crate::encoder::Encoder;

/// Writes input bytes as `0x..` entries of a Go byte-slice literal.
///
/// The opening `[]byte{\n\t` is written on construction. Entries are joined
/// by `, `, and every entry whose stream index is a positive multiple of 16
/// starts a new line instead. [`Encoder::finish`] appends the closing `}`.
pub struct GoSliceEncoder<W> {
    inner: W,
    count: u64,
    scratch: Vec<u8>,
    finished: bool,
}

impl<W: Write> GoSliceEncoder<W> {
    pub fn new(mut inner: W) -> io::Result<Self> {
        inner.write_all(GO_SLICE_OPEN)?;
        Ok(Self {
            inner,
            count: 0,
            scratch: Vec::new(),
            finished: false,
        })
    }
}

impl<W: Write> Write for GoSliceEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.scratch.clear();
        for &octet in buf {
            if self.count > 0 {
                if self.count % GO_BYTES_PER_LINE == 0 {
                    self.scratch.extend_from_slice(b",\n\t");
                } else {
                    self.scratch.extend_from_slice(b", ");
                }
            }
            let pair = HEX_TABLE[octet as usize];
            self.scratch.extend_from_slice(&[b'0', b'x', pair[0], pair[1]]);
            self.count += 1;
        }
        self.inner.write_all(&self.scratch)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Encoder for GoSliceEncoder<W> {
    fn finish(&mut self) -> io::Result<()> {
        if !self.finished {
            self.finished = true;
            self.inner.write_all(GO_SLICE_CLOSE)?;
        }
        self.inner.flush()
    }
}
