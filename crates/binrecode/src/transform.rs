//! The recoding pipeline: decode the source stream, re-encode into the sink.

use std::io::{self, Read, Write};

use binrecode_codecs::{lookup_decoder, lookup_encoder, Encoder};
use tracing::{debug, warn};

use crate::error::{RecodeError, Side};

/// Recodes everything readable from `input` from `source_format` to
/// `target_format`, writing the result to `output`.
///
/// Both names are resolved before any I/O, the target first, so an unknown
/// name leaves `output` untouched. The encoder is finished on every path
/// once it has been built. When streaming fails, that error is returned and
/// whatever the encoder flushes on finish still reaches `output`.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// binrecode::transform("raw", "base64", &b"test"[..], &mut out).unwrap();
/// assert_eq!(out, b"dGVzdA==");
/// ```
pub fn transform<R, W>(
    source_format: &str,
    target_format: &str,
    input: R,
    output: W,
) -> Result<(), RecodeError>
where
    R: Read,
    W: Write,
{
    let target = lookup_encoder(target_format).ok_or_else(|| RecodeError::FormatNotFound {
        side: Side::Target,
        name: target_format.to_string(),
    })?;
    let source = lookup_decoder(source_format).ok_or_else(|| RecodeError::FormatNotFound {
        side: Side::Source,
        name: source_format.to_string(),
    })?;
    debug!(%source, %target, "recoding");

    let mut sink = FinishOnDrop::new(target.encoder(output)?);
    let mut decoded = source.decoder(input);

    match io::copy(&mut decoded, &mut sink) {
        Ok(copied) => {
            sink.finish()?;
            debug!(copied, "recoded");
            Ok(())
        }
        Err(err) => {
            if let Err(finish_err) = sink.finish() {
                warn!(error = %finish_err, "finishing encoder after failed copy");
            }
            Err(err.into())
        }
    }
}

/// Owns an encoder and finishes it when dropped unless [`FinishOnDrop::finish`]
/// already ran. The drop path discards the finish error.
struct FinishOnDrop<'a> {
    encoder: Box<dyn Encoder + 'a>,
    finished: bool,
}

impl<'a> FinishOnDrop<'a> {
    fn new(encoder: Box<dyn Encoder + 'a>) -> Self {
        Self {
            encoder,
            finished: false,
        }
    }

    fn finish(mut self) -> io::Result<()> {
        self.finished = true;
        self.encoder.finish()
    }
}

impl Write for FinishOnDrop<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.encoder.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.encoder.flush()
    }
}

impl Drop for FinishOnDrop<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.encoder.finish();
        }
    }
}
