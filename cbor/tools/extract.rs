/*!
Extract command - copy the raw bytes of one top-level item
*/

use super::io::Endpoint;
use anyhow::Context;
use clap::Parser;
use oscore_cbor::{DEFAULT_MAX_RECURSION, decode::Decoder};

/// Copy the raw bytes of a single top-level item
#[derive(Parser, Debug)]
#[command(about = "Copy the raw encoded bytes of one top-level CBOR item", long_about = None)]
pub struct Command {
    /// Zero-based index of the item in the top-level sequence
    #[arg(short, long, default_value_t = 0)]
    index: usize,

    /// Treat the input as hex text rather than raw bytes
    #[arg(long)]
    hex: bool,

    /// Write the item as hex text rather than raw bytes
    #[arg(long)]
    hex_output: bool,

    /// Maximum nesting depth of arrays and maps
    #[arg(long, default_value_t = DEFAULT_MAX_RECURSION)]
    max_depth: usize,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<Endpoint>,

    /// Input CBOR file (use '-' for stdin)
    input: Endpoint,
}

impl Command {
    pub fn exec(self) -> anyhow::Result<()> {
        let data = self.input.read_cbor(self.hex)?;
        let item = extract(&data, self.index, self.max_depth)?;

        self.output
            .unwrap_or(Endpoint::Stdio)
            .write_cbor(&item, self.hex_output)
    }
}

pub(crate) fn extract(data: &[u8], index: usize, max_depth: usize) -> anyhow::Result<Vec<u8>> {
    let mut decoder = Decoder::new(data).with_max_recursion(max_depth);
    for i in 0..index {
        decoder
            .skip_value()
            .with_context(|| format!("Failed to skip item {i}"))?;
    }
    if decoder.is_empty() {
        anyhow::bail!("Input holds only {index} items");
    }
    decoder
        .strip_value()
        .with_context(|| format!("Failed to extract item {index}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extract() {
        let data = hex::decode("820102a10102f6").unwrap();
        assert_eq!(extract(&data, 0, 16).unwrap(), [0x82, 0x01, 0x02]);
        assert_eq!(extract(&data, 1, 16).unwrap(), [0xa1, 0x01, 0x02]);
        assert_eq!(extract(&data, 2, 16).unwrap(), [0xf6]);
        assert!(extract(&data, 3, 16).is_err());
    }
}
