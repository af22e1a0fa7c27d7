/*!
CBOR Tools - A CLI for walking CBOR item sequences

# Commands

- `inspect`: List each top-level item with its offset, length and major type
- `extract`: Copy the raw bytes of one top-level item

# Examples

```bash
# List the items in a file
cbor inspect context.cbor

# Input given as hex text
echo '820102 a10102' | cbor inspect --hex -

# Pull out the second item as raw CBOR
cbor extract --index 1 -o item.cbor context.cbor
```
*/

use clap::{Parser, Subcommand, ValueEnum};

mod extract;
mod inspect;
mod io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    /// Designates very low priority, often extremely verbose, information.
    #[value(name = "trace")]
    Trace,

    /// Designates lower priority information.
    #[value(name = "debug")]
    Debug,

    /// Designates useful information.
    #[value(name = "info")]
    Info,

    /// Designates hazardous situations.
    #[value(name = "warn")]
    Warn,

    /// Designates very serious errors.
    #[value(name = "error")]
    Error,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Trace => tracing::Level::TRACE,
            Verbosity::Debug => tracing::Level::DEBUG,
            Verbosity::Info => tracing::Level::INFO,
            Verbosity::Warn => tracing::Level::WARN,
            Verbosity::Error => tracing::Level::ERROR,
        }
    }
}

/// A CLI tool for walking CBOR data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output additional information, default 'info'.
    #[arg(short, long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "info")]
    verbose: Option<Verbosity>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the top-level items of a CBOR sequence
    Inspect(inspect::Command),

    /// Copy the raw bytes of a single top-level item
    Extract(extract::Command),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(level) = cli.verbose.map(tracing::Level::from) {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(level > tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| anyhow::anyhow!("Failed to set global default subscriber: {e}"))?;
    }

    match cli.command {
        Commands::Inspect(args) => args.exec(),
        Commands::Extract(args) => args.exec(),
    }
}
