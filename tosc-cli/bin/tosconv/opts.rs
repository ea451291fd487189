//! Command line argument parsing for the tosconv utility.

use std::path::PathBuf;

use clap::Parser;

use tosc_cli::CliConfig;

const EXAMPLES: &str = "\
The operation is determined by the input file extension:
  .tosc -> decompress to XML
  .xml  -> compress to .tosc

Examples:
  tosconv layout.tosc                # -> layout.xml
  tosconv -p layout.tosc             # -> layout.xml (pretty-printed)
  tosconv -o out.xml layout.tosc     # -> out.xml
  tosconv layout.xml                 # -> layout.tosc
  tosconv -f layout.tosc             # Overwrite existing layout.xml";

/// TouchOSC layout converter
///
/// Converts TouchOSC `.tosc` files to XML and back.
#[derive(Debug, Parser)]
#[command(
    name = "tosconv",
    version,
    disable_version_flag = true,
    about = "Convert TouchOSC .tosc files to/from XML",
    long_about = "tosconv converts TouchOSC .tosc layout files, which are zlib-compressed \
                 XML, into plain XML and back. The input extension selects the direction.",
    after_help = EXAMPLES
)]
pub struct TosconvOpts {
    /// Input file (.tosc or .xml)
    #[arg(value_name = "INPUT-FILE")]
    pub input: String,

    /// Output file path (default: derived from input)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite existing output file
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Pretty-print XML output (decompress only)
    #[arg(short = 'p', long = "pretty")]
    pub pretty: bool,

    /// Report sizes and ratios on stderr
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Show version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,
}

impl TosconvOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            output: self.output.clone(),
            force: self.force,
            pretty: self.pretty,
            verbose: self.verbose,
        }
    }
}
