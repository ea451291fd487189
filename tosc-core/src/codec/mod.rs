//! zlib envelope handling for `.tosc` payloads.
//!
//! The envelope is the standard RFC 1950 layout: a 2-byte header, a deflate
//! stream and a 4-byte Adler-32 checksum of the uncompressed data.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::CodecError;


/// Compression level used when the caller does not pick one.
pub const DEFAULT_LEVEL: u32 = 6;

/// Highest level accepted by [`compress_with_level`].
pub const MAX_LEVEL: u32 = 9;

/// Size of the zlib header plus the Adler-32 trailer.
pub const ENVELOPE_OVERHEAD: usize = 6;

/// Minimum amount of output space added per decode round.
const CHUNK_SIZE: usize = 64 * 1024;

/// Compresses `input` into a zlib envelope at [`DEFAULT_LEVEL`].
///
/// # Errors
///
/// Returns [`CodecError::Io`] if the encoder fails to finish the stream.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    compress_with_level(input, DEFAULT_LEVEL)
}

/// Compresses `input` into a zlib envelope at the given level.
///
/// The output is deterministic for a given input and level. An empty input
/// still produces the header and trailer.
///
/// # Parameters
///
/// * `input` - Uncompressed bytes
/// * `level` - Compression level (0-9)
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - `level` is above [`MAX_LEVEL`]
/// - The encoder fails to write or finish the stream
pub fn compress_with_level(input: &[u8], level: u32) -> Result<Vec<u8>, CodecError> {
    if level > MAX_LEVEL {
        return Err(CodecError::InvalidLevel { level });
    }

    let buffer = Vec::with_capacity(input.len() / 2 + ENVELOPE_OVERHEAD);
    let mut encoder = ZlibEncoder::new(buffer, Compression::new(level));
    encoder.write_all(input)?;
    Ok(encoder.finish()?)
}

/// Decompresses a complete zlib envelope.
///
/// Bytes following the end of the envelope are ignored.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The header is not a zlib header, the payload is not valid deflate data,
///   or the checksum does not match ([`CodecError::Corrupt`])
/// - The input ends before the stream is complete, including empty input
///   ([`CodecError::Truncated`])
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut decoder = Decompress::new(true);
    let mut output = Vec::with_capacity(input.len().saturating_mul(4).max(CHUNK_SIZE));

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.len().max(CHUNK_SIZE));
        }

        let total_in = decoder.total_in();
        let total_out = decoder.total_out();
        let consumed = usize::try_from(total_in).map_or(input.len(), |n| n.min(input.len()));

        let status = decoder
            .decompress_vec(&input[consumed..], &mut output, FlushDecompress::None)
            .map_err(|err| CodecError::Corrupt {
                message: err.to_string(),
            })?;

        if status == Status::StreamEnd {
            return Ok(output);
        }

        // Output space is always available here, so no progress means the
        // stream needs bytes that the input does not have.
        if decoder.total_in() == total_in && decoder.total_out() == total_out {
            return Err(CodecError::Truncated);
        }
    }
}
