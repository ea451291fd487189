//! TouchOSC layout converter
//!
//! Decompresses `.tosc` files to XML and compresses XML back into `.tosc`,
//! choosing the direction from the input file extension.

use std::process;

mod opts;

use opts::TosconvOpts;

use tosc_cli::{format_error_for_stderr, run_cli};

const PROGRAM_NAME: &str = "tosconv";

fn main() {
    let opts = TosconvOpts::parse();
    let config = opts.config();

    if let Err(err) = run_cli(&opts.input, &config, PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }
}
