//! Configuration types and constants for tosconv operations.

use std::path::PathBuf;

/// File extension for compressed TouchOSC layouts
pub const TOSC_EXTENSION: &str = "tosc";

/// File extension for plain XML layouts
pub const XML_EXTENSION: &str = "xml";

/// Direction of a conversion, selected by the input file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// `.xml` to `.tosc`
    Compress,
    /// `.tosc` to `.xml`
    Decompress,
}

impl OperationMode {
    /// Extension written by this operation when no output path is given.
    pub fn output_extension(self) -> &'static str {
        match self {
            OperationMode::Compress => TOSC_EXTENSION,
            OperationMode::Decompress => XML_EXTENSION,
        }
    }
}

/// Configuration for a single conversion
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit output path; derived from the input when `None`
    pub output: Option<PathBuf>,
    /// Overwrite an existing output file
    pub force: bool,
    /// Re-indent decompressed XML (ignored when compressing)
    pub pretty: bool,
    /// Report codec statistics on stderr
    pub verbose: bool,
}
