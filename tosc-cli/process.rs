//! High-level file processing and CLI orchestration.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{CliConfig, OperationMode};
use crate::error::{InvocationError, Result};
use crate::io::{
    ensure_output_available, generate_output_filename, read_input, resolve_operation,
    write_output,
};
use crate::operations::{compress_data, decompress_data};

/// Resolves the conversion direction and output path for an input file.
///
/// # Parameters
///
/// * `input_path` - Path to the `.tosc` or `.xml` input
/// * `config` - CLI configuration; `config.output` overrides the derived path
///
/// # Errors
///
/// Returns an error if the input extension is not supported.
pub fn resolve(input_path: &Path, config: &CliConfig) -> Result<(OperationMode, PathBuf)> {
    let mode = resolve_operation(input_path)?;
    let output_path = match &config.output {
        Some(path) => path.clone(),
        None => generate_output_filename(input_path, mode),
    };
    Ok((mode, output_path))
}

/// Converts a single file according to the CLI configuration.
///
/// This is the main entry point for file processing. It orchestrates the
/// complete workflow:
///
/// 1. Selects the operation from the input extension and derives the output path
/// 2. Refuses to continue if the output exists and `force` is not set
/// 3. Reads the whole input file
/// 4. Compresses, or decompresses and optionally pretty-prints
/// 5. Writes the output file, only once the conversion succeeded
///
/// # Parameters
///
/// * `input_path` - Path to the input file
/// * `config` - CLI configuration
///
/// # Returns
///
/// The path of the written output file.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The input extension is neither `.tosc` nor `.xml`
/// - The output file exists and `force` is not set
/// - The input file cannot be read
/// - The compressed data is corrupt, or the XML is malformed with `pretty` set
/// - The output file cannot be created or written
pub fn process_file(input_path: &Path, config: &CliConfig) -> Result<PathBuf> {
    let (mode, output_path) = resolve(input_path, config)?;

    ensure_output_available(&output_path, config.force)?;

    let input = read_input(input_path)?;

    let output = match mode {
        OperationMode::Compress => compress_data(&input, config)?,
        OperationMode::Decompress => decompress_data(&input, config)?,
    };

    write_output(&output_path, &output)?;

    Ok(output_path)
}

/// Runs a conversion and prints the resolved output path to stdout.
///
/// This is a convenience wrapper around [`process_file`] that attaches the
/// program name and input file to any error.
///
/// # Parameters
///
/// * `file` - Input file path as given on the command line
/// * `config` - CLI configuration
/// * `program` - Program name to include in error messages
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`] if the conversion
/// fails. Nothing is printed to stdout in that case.
pub fn run_cli(file: &str, config: &CliConfig, program: &str) -> io::Result<()> {
    let output_path = process_file(Path::new(file), config).map_err(|source| {
        io::Error::new(
            source.kind(),
            InvocationError {
                program: program.to_string(),
                file: file.to_string(),
                source,
            },
        )
    })?;

    println!("{}", output_path.display());
    Ok(())
}
