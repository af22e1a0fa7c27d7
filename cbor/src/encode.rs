use super::cursor::WriteCursor;
use super::*;

/// Number of bytes needed for an item head carrying `val`.
pub fn encoded_len(val: u64) -> usize {
    if val < 24 {
        1
    } else if val <= u8::MAX as u64 {
        2
    } else if val <= u16::MAX as u64 {
        3
    } else if val <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Appends CBOR items to a fixed-capacity buffer.
///
/// Every `put_*` operation returns the number of bytes it wrote. If the
/// remaining capacity cannot hold the whole item, it fails with
/// [`Error::NotEnoughData`] and writes nothing.
///
/// Container heads (`put_array`, `put_map`) only announce a count: the
/// caller must follow them with exactly that many items (twice that many for
/// maps).
#[derive(Debug)]
pub struct Encoder<'a> {
    cursor: WriteCursor<'a>,
}

impl<'a> Encoder<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            cursor: WriteCursor::new(data),
        }
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// The items encoded so far.
    pub fn written(&self) -> &[u8] {
        self.cursor.written()
    }

    fn emit_uint_minor(&mut self, major: MajorType, val: u64) -> Result<usize, Error> {
        let len = encoded_len(val);
        self.cursor.reserve(len)?;

        let major = major.bits();
        match len {
            1 => self.cursor.put_u8(major | (val as u8))?,
            2 => {
                self.cursor.put_u8(major | 24)?;
                self.cursor.put_u8(val as u8)?
            }
            3 => {
                self.cursor.put_u8(major | 25)?;
                self.cursor.put_slice(&(val as u16).to_be_bytes())?
            }
            5 => {
                self.cursor.put_u8(major | 26)?;
                self.cursor.put_slice(&(val as u32).to_be_bytes())?
            }
            _ => {
                self.cursor.put_u8(major | 27)?;
                self.cursor.put_slice(&val.to_be_bytes())?
            }
        }
        Ok(len)
    }

    fn emit_data(&mut self, major: MajorType, data: &[u8]) -> Result<usize, Error> {
        let head = encoded_len(data.len() as u64);
        self.cursor.reserve(head.saturating_add(data.len()))?;
        self.emit_uint_minor(major, data.len() as u64)?;
        self.cursor.put_slice(data)?;
        Ok(head + data.len())
    }

    pub fn put_nil(&mut self) -> Result<usize, Error> {
        self.cursor.put_u8(0xf6)?;
        Ok(1)
    }

    pub fn put_true(&mut self) -> Result<usize, Error> {
        self.cursor.put_u8(0xf5)?;
        Ok(1)
    }

    pub fn put_false(&mut self) -> Result<usize, Error> {
        self.cursor.put_u8(0xf4)?;
        Ok(1)
    }

    pub fn put_bool(&mut self, value: bool) -> Result<usize, Error> {
        if value {
            self.put_true()
        } else {
            self.put_false()
        }
    }

    pub fn put_unsigned(&mut self, value: u64) -> Result<usize, Error> {
        self.emit_uint_minor(MajorType::Unsigned, value)
    }

    /// Encode the negative integer `-magnitude`.
    pub fn put_negative(&mut self, magnitude: u64) -> Result<usize, Error> {
        if magnitude == 0 {
            return Err(Error::ZeroMagnitude);
        }
        self.emit_uint_minor(MajorType::Negative, magnitude - 1)
    }

    pub fn put_number(&mut self, value: i64) -> Result<usize, Error> {
        if value < 0 {
            self.put_negative(value.unsigned_abs())
        } else {
            self.put_unsigned(value as u64)
        }
    }

    pub fn put_text(&mut self, text: &str) -> Result<usize, Error> {
        self.emit_data(MajorType::Text, text.as_bytes())
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        self.emit_data(MajorType::Bytes, bytes)
    }

    pub fn put_array(&mut self, count: usize) -> Result<usize, Error> {
        self.emit_uint_minor(MajorType::Array, count as u64)
    }

    /// Announce a map of `count` key/value pairs.
    pub fn put_map(&mut self, count: usize) -> Result<usize, Error> {
        self.emit_uint_minor(MajorType::Map, count as u64)
    }

    pub fn put_tag(&mut self, value: u64) -> Result<usize, Error> {
        self.emit_uint_minor(MajorType::Tag, value)
    }

    /// Values 32 and above use the two-byte `0xf8` form. Values 24 to 31 have
    /// no well-formed encoding and fail with [`Error::Unsupported`].
    pub fn put_simple_value(&mut self, value: u8) -> Result<usize, Error> {
        if (24..32).contains(&value) {
            return Err(Error::Unsupported(value));
        }
        self.emit_uint_minor(MajorType::Simple, value as u64)
    }

    /// Append already-encoded CBOR, e.g. the output of
    /// [`strip_value`](crate::decode::Decoder::strip_value).
    pub fn put_raw(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.cursor.put_slice(data)?;
        Ok(data.len())
    }
}
