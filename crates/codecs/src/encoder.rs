use std::io::{self, Write};

/// A byte sink that writes the encoded form of everything written to it.
///
/// Output is produced as input arrives, but some formats keep a trailing
/// fragment (an incomplete base64 triple, the buffered `rhex` input) or owe
/// closing punctuation. [`Encoder::finish`] writes all of that and flushes the
/// wrapped sink. Calling it again is a no-op.
pub trait Encoder: Write {
    fn finish(&mut self) -> io::Result<()>;
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Identity encoder.
pub struct RawEncoder<W> {
    inner: W,
}

impl<W: Write> RawEncoder<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for RawEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Encoder for RawEncoder<W> {
    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
