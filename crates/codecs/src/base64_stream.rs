//! Streaming base64 adapters over the `base64` crate's engines.

use std::io::{self, Read, Write};

use base64::engine::general_purpose::{self, GeneralPurpose};
use base64::write::EncoderWriter;
use base64::Engine;

use crate::encoder::Encoder;
use crate::error::DecodeError;

static STANDARD: GeneralPurpose = general_purpose::STANDARD;
static STANDARD_NO_PAD: GeneralPurpose = general_purpose::STANDARD_NO_PAD;
static URL_SAFE: GeneralPurpose = general_purpose::URL_SAFE;
static URL_SAFE_NO_PAD: GeneralPurpose = general_purpose::URL_SAFE_NO_PAD;

/// Alphabet and padding combination.
///
/// Padded variants emit `=` padding and require canonical padding when
/// decoding. Unpadded variants emit none and reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base64Variant {
    Standard,
    StandardNoPad,
    UrlSafe,
    UrlSafeNoPad,
}

impl Base64Variant {
    pub const ALL: [Base64Variant; 4] = [
        Base64Variant::Standard,
        Base64Variant::StandardNoPad,
        Base64Variant::UrlSafe,
        Base64Variant::UrlSafeNoPad,
    ];

    /// Registry name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            Base64Variant::Standard => "base64",
            Base64Variant::StandardNoPad => "base64raw",
            Base64Variant::UrlSafe => "base64url",
            Base64Variant::UrlSafeNoPad => "base64urlraw",
        }
    }

    pub fn engine(self) -> &'static GeneralPurpose {
        match self {
            Base64Variant::Standard => &STANDARD,
            Base64Variant::StandardNoPad => &STANDARD_NO_PAD,
            Base64Variant::UrlSafe => &URL_SAFE,
            Base64Variant::UrlSafeNoPad => &URL_SAFE_NO_PAD,
        }
    }
}

/// Base64 encoder over a byte sink.
pub struct Base64Encoder<W: Write> {
    writer: EncoderWriter<'static, GeneralPurpose, WholeWrites<W>>,
    finished: bool,
}

impl<W: Write> Base64Encoder<W> {
    pub fn new(inner: W, variant: Base64Variant) -> Self {
        Self {
            writer: EncoderWriter::new(WholeWrites(inner), variant.engine()),
            finished: false,
        }
    }
}

impl<W: Write> Write for Base64Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finished {
            return Err(io::Error::other("base64 encoder already finished"));
        }
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.writer.flush()
    }
}

impl<W: Write> Encoder for Base64Encoder<W> {
    fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        let mut inner = self.writer.finish()?;
        self.finished = true;
        inner.flush()
    }
}

/// Turns every `write` into a `write_all` on the sink.
///
/// `EncoderWriter` hands its delegate one `write` per call and answers
/// `Ok(0)` while encoded output from a short write is still parked, which
/// `write_all` callers take as a closed sink.
struct WholeWrites<W>(W);

impl<W: Write> Write for WholeWrites<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Encoded characters read from the source per fill. A multiple of 4.
const DECODE_CHUNK: usize = 1024;

const PAD: u8 = b'=';

/// Base64 decoder over a byte source. Line breaks (`\r`, `\n`) in the input
/// are skipped.
///
/// Input is decoded in whole 4-character groups. When a group is malformed,
/// the bytes of the groups before it are yielded first and every later read
/// fails with [`DecodeError::Base64`]. Error offsets count characters of the
/// input with line breaks removed.
pub struct Base64Decoder<R> {
    inner: LineBreakFilter<R>,
    engine: &'static GeneralPurpose,
    /// Characters read but not yet decoded.
    encoded: Vec<u8>,
    /// Stream offset of `encoded[0]`.
    offset: usize,
    decoded: Vec<u8>,
    pos: usize,
    eof: bool,
    err: Option<DecodeError>,
}

impl<R: Read> Base64Decoder<R> {
    pub fn new(inner: R, variant: Base64Variant) -> Self {
        Self {
            inner: LineBreakFilter::new(inner),
            engine: variant.engine(),
            encoded: Vec::with_capacity(DECODE_CHUNK + 4),
            offset: 0,
            decoded: Vec::new(),
            pos: 0,
            eof: false,
            err: None,
        }
    }

    /// Reads more characters and decodes every group known not to be the
    /// last one, or everything once the source is exhausted.
    fn fill(&mut self) -> io::Result<()> {
        let start = self.encoded.len();
        self.encoded.resize(start + DECODE_CHUNK, 0);
        let n = match self.inner.read(&mut self.encoded[start..]) {
            Ok(n) => n,
            Err(err) => {
                self.encoded.truncate(start);
                return Err(err);
            }
        };
        self.encoded.truncate(start + n);
        if n == 0 {
            self.eof = true;
        }

        // Padding may only close the final group, so one character is held
        // back until end of input decides which group that is.
        let ready = if self.eof {
            self.encoded.len()
        } else {
            self.encoded.len().saturating_sub(1) / 4 * 4
        };
        if ready > 0 {
            self.decode_groups(ready);
        }
        Ok(())
    }

    fn decode_groups(&mut self, ready: usize) {
        let groups: Vec<u8> = self.encoded.drain(..ready).collect();
        let base = self.offset;
        self.offset += ready;
        self.pos = 0;

        let early_pad = groups.iter().position(|&c| c == PAD).filter(|_| !self.eof);
        let result = match early_pad {
            Some(at) => Err(base64::DecodeError::InvalidByte(at, PAD)),
            None => self.engine.decode(&groups),
        };
        match result {
            Ok(bytes) => self.decoded = bytes,
            Err(err) => {
                let valid = match err {
                    base64::DecodeError::InvalidByte(at, _)
                    | base64::DecodeError::InvalidLastSymbol(at, _) => at / 4 * 4,
                    _ => groups.len().saturating_sub(1) / 4 * 4,
                };
                self.decoded = self.engine.decode(&groups[..valid]).unwrap_or_default();
                self.err = Some(DecodeError::Base64(at_stream_offset(err, base)));
            }
        }
    }
}

impl<R: Read> Read for Base64Decoder<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        loop {
            if self.pos < self.decoded.len() {
                let n = out.len().min(self.decoded.len() - self.pos);
                out[..n].copy_from_slice(&self.decoded[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }
            if let Some(err) = &self.err {
                return Err(err.clone().into());
            }
            if self.eof {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}

fn at_stream_offset(err: base64::DecodeError, base: usize) -> base64::DecodeError {
    match err {
        base64::DecodeError::InvalidByte(at, byte) => {
            base64::DecodeError::InvalidByte(base + at, byte)
        }
        base64::DecodeError::InvalidLastSymbol(at, byte) => {
            base64::DecodeError::InvalidLastSymbol(base + at, byte)
        }
        other => other,
    }
}

/// Drops `\r` and `\n` from the wrapped source.
pub struct LineBreakFilter<R> {
    inner: R,
}

impl<R: Read> LineBreakFilter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Read for LineBreakFilter<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                let octet = buf[i];
                if octet != b'\r' && octet != b'\n' {
                    buf[kept] = octet;
                    kept += 1;
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(data: &[u8], variant: Base64Variant) -> String {
        let mut out = Vec::new();
        let mut enc = Base64Encoder::new(&mut out, variant);
        enc.write_all(data).unwrap();
        enc.finish().unwrap();
        drop(enc);
        String::from_utf8(out).unwrap()
    }

    fn decode(text: &[u8], variant: Base64Variant) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        Base64Decoder::new(text, variant).read_to_end(&mut out)?;
        Ok(out)
    }

    #[test]
    fn test_encode_variants() {
        assert_eq!(encode(b"test", Base64Variant::Standard), "dGVzdA==");
        assert_eq!(encode(b"test", Base64Variant::StandardNoPad), "dGVzdA");
        assert_eq!(encode(&[0xfb, 0xff], Base64Variant::Standard), "+/8=");
        assert_eq!(encode(&[0xfb, 0xff], Base64Variant::UrlSafe), "-_8=");
        assert_eq!(encode(&[0xfb, 0xff], Base64Variant::UrlSafeNoPad), "-_8");
    }

    #[test]
    fn test_encode_empty() {
        for variant in Base64Variant::ALL {
            assert_eq!(encode(b"", variant), "");
        }
    }

    #[test]
    fn test_encode_split_writes() {
        let mut out = Vec::new();
        let mut enc = Base64Encoder::new(&mut out, Base64Variant::Standard);
        for chunk in b"hello world".chunks(2) {
            enc.write_all(chunk).unwrap();
        }
        enc.finish().unwrap();
        enc.finish().unwrap();
        drop(enc);
        assert_eq!(out, b"aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_decode_variants() {
        assert_eq!(decode(b"dGVzdA==", Base64Variant::Standard).unwrap(), b"test");
        assert_eq!(decode(b"dGVzdA", Base64Variant::StandardNoPad).unwrap(), b"test");
        assert_eq!(decode(b"-_8=", Base64Variant::UrlSafe).unwrap(), [0xfb, 0xff]);
        assert_eq!(decode(b"-_8", Base64Variant::UrlSafeNoPad).unwrap(), [0xfb, 0xff]);
    }

    #[test]
    fn test_decode_skips_line_breaks() {
        assert_eq!(
            decode(b"aGVs\r\nbG8g\nd29y\nbGQ=\n", Base64Variant::Standard).unwrap(),
            b"hello world"
        );
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode(b"dGVz!!!!", Base64Variant::Standard).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(matches!(
            DecodeError::from_io(&err),
            Some(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_rejects_padding_when_unpadded() {
        let err = decode(b"dGVzdA==", Base64Variant::StandardNoPad).unwrap_err();
        assert!(matches!(
            DecodeError::from_io(&err),
            Some(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_url_alphabet_rejected_by_standard() {
        assert!(decode(b"-_8=", Base64Variant::Standard).is_err());
    }

    /// Sink that takes at most three bytes per write.
    struct Narrow(Vec<u8>);

    impl Write for Narrow {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(3);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn decode_partial(text: &[u8], variant: Base64Variant) -> (Vec<u8>, io::Error) {
        let mut out = Vec::new();
        let err = Base64Decoder::new(text, variant)
            .read_to_end(&mut out)
            .unwrap_err();
        (out, err)
    }

    #[test]
    fn test_encode_into_short_writing_sink() {
        let data = b"hello world, this is a longer input";
        let mut sink = Narrow(Vec::new());
        let mut enc = Base64Encoder::new(&mut sink, Base64Variant::Standard);
        for chunk in data.chunks(4) {
            enc.write_all(chunk).unwrap();
        }
        enc.finish().unwrap();
        drop(enc);
        assert_eq!(sink.0, encode(data, Base64Variant::Standard).as_bytes());
    }

    #[test]
    fn test_decode_yields_groups_before_invalid_character() {
        let (out, err) = decode_partial(b"dGVz!!!!", Base64Variant::Standard);
        assert_eq!(out, b"tes");
        assert_eq!(
            DecodeError::from_io(&err),
            Some(&DecodeError::Base64(base64::DecodeError::InvalidByte(4, b'!')))
        );
    }

    #[test]
    fn test_decode_long_valid_prefix_then_invalid() {
        let data: Vec<u8> = (0..120u8).collect();
        let mut text = encode(&data, Base64Variant::Standard).into_bytes();
        assert_eq!(text.len(), 160);
        text.extend_from_slice(b"!!!!");
        let (out, err) = decode_partial(&text, Base64Variant::Standard);
        assert_eq!(out, data);
        assert_eq!(
            DecodeError::from_io(&err),
            Some(&DecodeError::Base64(base64::DecodeError::InvalidByte(160, b'!')))
        );
    }

    #[test]
    fn test_decode_rejects_padding_before_more_input() {
        let (out, err) = decode_partial(b"dGVzdA==dGVz", Base64Variant::Standard);
        assert_eq!(out, b"tes");
        assert_eq!(
            DecodeError::from_io(&err),
            Some(&DecodeError::Base64(base64::DecodeError::InvalidByte(6, b'=')))
        );
    }

    #[test]
    fn test_decode_error_is_sticky() {
        let mut dec = Base64Decoder::new(&b"dGVz!!!!"[..], Base64Variant::Standard);
        let mut buf = [0u8; 16];
        assert_eq!(dec.read(&mut buf).unwrap(), 3);
        assert!(dec.read(&mut buf).is_err());
        assert!(dec.read(&mut buf).is_err());
    }

    #[test]
    fn test_line_break_filter_only_newlines() {
        let mut out = Vec::new();
        LineBreakFilter::new(&b"\n\r\n"[..])
            .read_to_end(&mut out)
            .unwrap();
        assert!(out.is_empty());
    }
}
