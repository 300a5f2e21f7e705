//! Command-line interface for the `generate_configs` tool.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::core::generator::{ConfigGenerator, GeneratorError};
use crate::core::render::OutputFormat;

/// Generate randomized plane cards and print them to stdout.
///
/// Paste the output into a file under `Planes/` to register the planes
/// as `Generated<N>` cards.
#[derive(Parser, Debug)]
#[command(name = "generate_configs")]
#[command(version, about = "Generate randomized plane config blocks")]
pub struct Cli {
    /// Number of planes to generate
    pub count: u32,

    /// Index of the first plane's label
    #[arg(allow_negative_numbers = true)]
    pub start_index: i64,

    /// RNG seed for reproducible output (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// RON file overriding sampling ranges
    #[arg(long)]
    pub ranges: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Build the generator described by the arguments and write the batch to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<(), GeneratorError> {
        let mut builder = ConfigGenerator::builder();
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if let Some(ref path) = self.ranges {
            builder = builder.ranges_path(path);
        }
        let mut generator = builder.build()?;
        generator.write_batch(self.count, self.start_index, self.format, out)
    }
}
