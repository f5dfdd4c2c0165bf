//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// WiX installer-descriptor generator
#[derive(Parser, Debug)]
#[command(
    name = "wixgen",
    version,
    about = "Generates WiX .wxs installer descriptors from a directory of application files",
    long_about = "Scans a source directory and emits a WiX .wxs installer descriptor describing \
its files, directories, shortcuts, and URL-protocol registrations.

Reads product metadata from a TOML or JSON configuration file and writes the descriptor to a file \
or to stdout. The descriptor is consumed by the WiX toolchain (candle/light); wixgen never invokes \
that toolchain itself.

Usage:
  wixgen --config app.toml --output app.wxs
  wixgen --config app.json --source ./build/app
  wixgen --config app.toml --compact

Exit code 0 = descriptor fully written."
)]
pub struct Args {
    /// Configuration file (.toml or .json) with product metadata
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,

    /// Override the source directory from the configuration file
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output path for the descriptor (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit the descriptor on a single line instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        let extension = self
            .config
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let valid_extensions = ["toml", "json"];
        if !valid_extensions.contains(&extension) {
            return Err(format!(
                "Unsupported config format: {}. Valid extensions: {}",
                self.config.display(),
                valid_extensions.join(", ")
            ));
        }

        Ok(())
    }
}
