//! Error types for tosconv operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tosc_core::{CodecError, MarkupError};

/// A failed conversion together with the context needed to report it.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output
    pub program: String,
    /// Input file path as given on the command line
    pub file: String,
    /// Underlying error produced by processing
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.program, self.file, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Formats an error message for stderr.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output.
/// - `err`: The I/O error returned by the CLI runner.
///
/// # Returns
///
/// A single-line message suitable for stderr. Errors raised by
/// [`crate::run_cli`] already carry the program and file prefix.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>())
    {
        Some(run_err) => run_err.to_string(),
        None => format!("{program}: {err}"),
    }
}

/// Main error type for tosconv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input extension is neither `.tosc` nor `.xml`
    #[error("unsupported file extension \"{extension}\" (expected .tosc or .xml)")]
    UnsupportedExtension {
        /// Extension found on the input path, with leading dot
        extension: String,
    },

    /// Failed to read input file
    #[error("failed to read input file: {source}")]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: failed to create output file: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write or flush the output file
    #[error("{}: failed to write output file: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists
    #[error("output file \"{}\" already exists (use -f to overwrite)", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Compression operation failed
    #[error("failed to compress: {0}")]
    Compression(#[source] CodecError),

    /// Decompression operation failed
    #[error("failed to decompress: {0}")]
    Decompression(#[source] CodecError),

    /// Decompressed XML could not be reformatted
    #[error("failed to pretty-print: {0}")]
    PrettyPrint(#[from] MarkupError),
}

/// Specialized `Result` type for tosconv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the [`io::ErrorKind`] that best describes this failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::OutputExists { .. } => io::ErrorKind::AlreadyExists,
            Error::UnsupportedExtension { .. } => io::ErrorKind::InvalidInput,
            Error::Compression(_) | Error::Decompression(_) | Error::PrettyPrint(_) => {
                io::ErrorKind::InvalidData
            }
            // Preserve the original error kind
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::WriteOutput { source, .. } => source.kind(),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.kind(), err)
    }
}
