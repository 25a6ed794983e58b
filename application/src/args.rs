//! [`Args`] definitions.

use clap::Parser;

/// GraphQL server quoting stays and packages.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the catalog JSON file, overriding the configured one.
    #[arg(long)]
    pub catalog: Option<String>,
}

impl Args {
    /// Parses command line arguments of the current process.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
