//! Shared functionality for the `tosconv` command-line tool.
//!
//! This crate connects the codec and markup operations from `tosc-core` to
//! the file system: it picks the conversion direction from the input
//! extension, derives output paths, guards against accidental overwrites and
//! reports results the way a command-line utility should.

mod config;
mod error;
mod io;
mod operations;
mod process;


pub use config::{CliConfig, OperationMode, TOSC_EXTENSION, XML_EXTENSION};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use io::{
    ensure_output_available, generate_output_filename, read_input, resolve_operation,
    write_output,
};
pub use operations::{compress_data, decompress_data};
pub use process::{process_file, resolve, run_cli};
