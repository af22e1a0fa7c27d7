/*!
Reading and writing CBOR payloads, raw or as hex text, from files or stdio
*/

use anyhow::Context;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// A file path, or `-` for stdin/stdout
#[derive(Debug, Clone)]
pub enum Endpoint {
    Stdio,
    File(PathBuf),
}

impl Endpoint {
    /// Read the whole payload; hex text may contain whitespace
    pub fn read_cbor(&self, is_hex: bool) -> anyhow::Result<Vec<u8>> {
        let mut data = Vec::new();
        match self {
            Self::Stdio => std::io::stdin()
                .read_to_end(&mut data)
                .map(|_| ())
                .context("Failed to read stdin")?,
            Self::File(path) => {
                data = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?
            }
        }
        if !is_hex {
            return Ok(data);
        }
        data.retain(|b| !b.is_ascii_whitespace());
        hex::decode(data).context("Input is not valid hex")
    }

    /// Write `data` as raw bytes, or as a line of hex text
    pub fn write_cbor(&self, data: &[u8], as_hex: bool) -> anyhow::Result<()> {
        if as_hex {
            self.write_text(&(hex::encode(data) + "\n"))
        } else {
            self.write_bytes(data)
        }
    }

    pub fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.write_bytes(text.as_bytes())
    }

    fn write_bytes(&self, data: &[u8]) -> anyhow::Result<()> {
        match self {
            Self::Stdio => std::io::stdout()
                .write_all(data)
                .context("Failed to write stdout"),
            Self::File(path) => std::fs::write(path, data)
                .with_context(|| format!("Failed to write {}", path.display())),
        }
    }
}

impl FromStr for Endpoint {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "-" => Self::Stdio,
            path => Self::File(PathBuf::from(path)),
        })
    }
}
