//! Compression and decompression operations for tosconv.

use tosc_core::{compress, decompress, pretty_print};

use crate::config::CliConfig;
use crate::error::{Error, Result};

/// Calculates the compression/decompression ratio as a percentage.
///
/// # Parameters
///
/// * `numerator` - Output byte count
/// * `denominator` - Input byte count
///
/// # Returns
///
/// The ratio as a percentage (0.0-100.0+), or 0.0 if denominator is zero.
pub(crate) fn calculate_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        // Split into quotient and remainder to avoid lossy usize -> f64 casts
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;

        f64::from(u32::try_from(quotient).unwrap_or(u32::MAX)) * 100.0
            + (f64::from(u32::try_from(remainder).unwrap_or(u32::MAX))
                / f64::from(u32::try_from(denominator).unwrap_or(u32::MAX)))
                * 100.0
    } else {
        0.0
    }
}

/// Compresses XML into a `.tosc` envelope.
///
/// The `pretty` flag has no effect in this direction.
///
/// # Parameters
///
/// * `input` - XML bytes
/// * `config` - CLI configuration controlling verbosity
///
/// # Errors
///
/// Returns [`Error::Compression`] if the encoder fails.
pub fn compress_data(input: &[u8], config: &CliConfig) -> Result<Vec<u8>> {
    let output = compress(input).map_err(Error::Compression)?;

    if config.verbose {
        eprintln!(
            "Compressed {} bytes to {} bytes ({:.1}% ratio)",
            input.len(),
            output.len(),
            calculate_ratio(output.len(), input.len())
        );
    }

    Ok(output)
}

/// Decompresses a `.tosc` envelope, optionally re-indenting the XML.
///
/// # Parameters
///
/// * `input` - Compressed bytes
/// * `config` - CLI configuration controlling pretty-printing and verbosity
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The envelope is corrupt or truncated ([`Error::Decompression`])
/// - `pretty` is set and the XML is not well-formed ([`Error::PrettyPrint`])
pub fn decompress_data(input: &[u8], config: &CliConfig) -> Result<Vec<u8>> {
    let output = decompress(input).map_err(Error::Decompression)?;

    if config.verbose {
        eprintln!(
            "Decompressed {} bytes to {} bytes ({:.1}% expansion)",
            input.len(),
            output.len(),
            calculate_ratio(output.len(), input.len())
        );
    }

    if !config.pretty {
        return Ok(output);
    }

    let formatted = pretty_print(&output)?;
    if config.verbose {
        eprintln!(
            "Reformatted {} bytes of XML to {} bytes",
            output.len(),
            formatted.len()
        );
    }

    Ok(formatted)
}
