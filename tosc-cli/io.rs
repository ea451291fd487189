//! File I/O operations and path manipulation for tosconv.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{OperationMode, TOSC_EXTENSION, XML_EXTENSION};
use crate::error::{Error, Result};

/// Selects the conversion direction from the input file extension.
///
/// The comparison is case-insensitive: `.tosc` decompresses and `.xml`
/// compresses.
///
/// # Errors
///
/// Returns [`Error::UnsupportedExtension`] for any other extension, or when
/// the path has none.
pub fn resolve_operation(input: &Path) -> Result<OperationMode> {
    let extension = input
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        TOSC_EXTENSION => Ok(OperationMode::Decompress),
        XML_EXTENSION => Ok(OperationMode::Compress),
        "" => Err(Error::UnsupportedExtension {
            extension: String::new(),
        }),
        other => Err(Error::UnsupportedExtension {
            extension: format!(".{other}"),
        }),
    }
}

/// Generates the output filename for `input` when none was given.
///
/// The input extension is replaced by the extension of the other format,
/// so `layout.tosc` becomes `layout.xml` in the same directory.
pub fn generate_output_filename(input: &Path, mode: OperationMode) -> PathBuf {
    input.with_extension(mode.output_extension())
}

/// Fails if `path` exists and overwriting was not requested.
///
/// # Errors
///
/// Returns [`Error::OutputExists`] when the file is present and `force` is
/// `false`.
pub fn ensure_output_available(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file is missing or unreadable.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates (or truncates) `path` and writes `data` to it.
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - The file cannot be created due to permissions, missing directories, etc.
/// - Writing the data fails (disk full, etc.)
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(data)
        .and_then(|()| file.flush())
        .map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
