/*!
Inspect command - list the top-level items of a CBOR sequence
*/

use super::io::Endpoint;
use anyhow::Context;
use clap::Parser;
use oscore_cbor::{DEFAULT_MAX_RECURSION, MajorType, decode::Decoder};
use std::fmt::Write;

/// List the top-level items of a CBOR sequence
#[derive(Parser, Debug)]
#[command(about = "List each top-level CBOR item with its offset, length and type", long_about = None)]
pub struct Command {
    /// Treat the input as hex text rather than raw bytes
    #[arg(long)]
    hex: bool,

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
        let text = walk(&data, self.max_depth)?;
        self.output.unwrap_or(Endpoint::Stdio).write_text(&text)?;
        Ok(())
    }
}

/// Describe the head of the item at the decoder's position
fn describe(decoder: &Decoder, major: MajorType) -> anyhow::Result<String> {
    let mut peek = decoder.clone();
    Ok(match major {
        MajorType::Unsigned => format!("{}", peek.get_unsigned_integer()?),
        MajorType::Negative => format!("-1-{}", peek.get_negative_raw()?),
        MajorType::Bytes | MajorType::Text => format!("length {}", peek.get_string_len()?),
        MajorType::Array => format!("{} items", peek.get_array_len()?),
        MajorType::Map => format!("{} pairs", peek.get_map_len()?),
        MajorType::Tag => format!("tag {}", peek.get_tag()?),
        MajorType::Simple => match peek.get_simple_value()? {
            20 => "false".to_string(),
            21 => "true".to_string(),
            22 => "null".to_string(),
            v => format!("simple({v})"),
        },
    })
}

pub(crate) fn walk(data: &[u8], max_depth: usize) -> anyhow::Result<String> {
    let mut decoder = Decoder::new(data).with_max_recursion(max_depth);
    let mut text = String::new();
    let mut index = 0;
    while !decoder.is_empty() {
        let offset = decoder.offset();
        let major = decoder.get_next_element()?;
        let summary = describe(&decoder, major)
            .with_context(|| format!("Failed to decode item {index} at offset {offset}"))?;
        let item = decoder
            .strip_value_ref()
            .with_context(|| format!("Failed to walk item {index} at offset {offset}"))?;

        tracing::debug!("Item {index}: {major} of {} bytes", item.len());
        writeln!(
            text,
            "{index:>4} @{offset:<6} {:>6} bytes  {major}: {summary}  {}",
            item.len(),
            hex::encode(item)
        )?;
        index += 1;
    }
    Ok(text)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_walk() {
        let data = hex::decode("820102a10102c1f6f5").unwrap();
        let text = walk(&data, 16).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Array: 2 items  820102"));
        assert!(lines[1].contains("Map: 1 pairs  a10102"));
        assert!(lines[2].contains("Tag: tag 1  c1f6"));
        assert!(lines[3].contains("Simple Value: true  f5"));
    }

    #[test]
    fn test_walk_truncated() {
        let data = hex::decode("8301").unwrap();
        assert!(walk(&data, 16).is_err());
    }
}
