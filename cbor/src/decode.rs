use super::alloc_buf::{Allocator, Global, copy_into};
use super::cursor::ReadCursor;
use super::*;
use alloc::string::String;
use alloc::vec::Vec;

/// A decoded byte or text string, in a buffer owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedString {
    Bytes(Vec<u8>),
    Text(Vec<u8>),
}

impl OwnedString {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(b) | Self::Text(b) => b,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Bytes(b) | Self::Text(b) => b,
        }
    }
}

/// Read the head of the item at `cursor`, returning its major type and the
/// additional-info quantity.
///
/// The quantity is a string length, container count, integer value or tag
/// number depending on the major type.
pub(crate) fn read_head(cursor: &mut ReadCursor) -> Result<(MajorType, u64), Error> {
    let initial = cursor.read_u8()?;
    let major = MajorType::from_initial_byte(initial);
    let val = match initial & 0x1f {
        minor @ 0..=23 => minor as u64,
        24 => cursor.read_u8()? as u64,
        25 => u16::from_be_bytes(read_array(cursor)?) as u64,
        26 => u32::from_be_bytes(read_array(cursor)?) as u64,
        27 => u64::from_be_bytes(read_array(cursor)?),
        minor => return Err(Error::InvalidMinorValue(minor)),
    };
    Ok((major, val))
}

fn read_array<const N: usize>(cursor: &mut ReadCursor) -> Result<[u8; N], Error> {
    let mut a = [0u8; N];
    a.copy_from_slice(cursor.take(N)?);
    Ok(a)
}

fn negative_from_raw(n: u64) -> Result<i64, Error> {
    i64::try_from(n)
        .map(|n| -1 - n)
        .map_err(|_| Error::IntegerOverflow(n))
}

pub(crate) fn to_len(val: u64) -> Result<usize, Error> {
    usize::try_from(val).map_err(|_| Error::TooLarge(val))
}

/// Reads CBOR items from a borrowed buffer.
///
/// Typed accessors check the major type before consuming anything, so a
/// caller can peek with [`get_next_element`](Self::get_next_element) or
/// simply try one interpretation and fall back to another. Every operation
/// is all-or-nothing: on error the read position is unchanged.
#[derive(Debug, Clone)]
pub struct Decoder<'a, A: Allocator = Global> {
    pub(crate) cursor: ReadCursor<'a>,
    pub(crate) allocator: A,
    pub(crate) max_recursion: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ReadCursor::new(data),
            allocator: Global,
            max_recursion: DEFAULT_MAX_RECURSION,
        }
    }
}

impl<'a, A: Allocator> Decoder<'a, A> {
    /// Replace the allocator used for owned results.
    pub fn with_allocator<B: Allocator>(self, allocator: B) -> Decoder<'a, B> {
        Decoder {
            cursor: self.cursor,
            allocator,
            max_recursion: self.max_recursion,
        }
    }

    /// Limit how deeply nested arrays and maps may be walked.
    pub fn with_max_recursion(mut self, max_recursion: usize) -> Self {
        self.max_recursion = max_recursion;
        self
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Run `f` against a copy of the cursor, committing only on success.
    pub(crate) fn atomic<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut ReadCursor<'a>) -> Result<T, Error>,
    {
        let mut cursor = self.cursor;
        let r = f(&mut cursor)?;
        self.cursor = cursor;
        Ok(r)
    }

    /// Peek the major type of the next item without consuming it.
    pub fn get_next_element(&self) -> Result<MajorType, Error> {
        self.cursor.peek().map(MajorType::from_initial_byte)
    }

    /// Consume the next item head and return its additional-info quantity,
    /// whatever the major type.
    pub fn get_element_size(&mut self) -> Result<u64, Error> {
        self.atomic(|c| read_head(c).map(|(_, val)| val))
    }

    fn get_head_of(&mut self, expected: MajorType) -> Result<u64, Error> {
        self.atomic(|c| match read_head(c)? {
            (major, val) if major == expected => Ok(val),
            (major, _) => Err(Error::IncorrectType(expected.type_name(), major)),
        })
    }

    /// Consume a byte or text string head, returning the payload length.
    pub fn get_string_len(&mut self) -> Result<usize, Error> {
        self.atomic(|c| match read_head(c)? {
            (MajorType::Bytes | MajorType::Text, len) => to_len(len),
            (major, _) => Err(Error::IncorrectType("String", major)),
        })
    }

    pub fn get_array_len(&mut self) -> Result<usize, Error> {
        self.get_head_of(MajorType::Array).and_then(to_len)
    }

    /// Consume a map head, returning the number of key/value pairs.
    pub fn get_map_len(&mut self) -> Result<usize, Error> {
        self.get_head_of(MajorType::Map).and_then(to_len)
    }

    /// Consume a tag head. The tagged item follows as a separate element.
    pub fn get_tag(&mut self) -> Result<u64, Error> {
        self.get_head_of(MajorType::Tag)
    }

    pub fn get_unsigned_integer(&mut self) -> Result<u64, Error> {
        self.get_head_of(MajorType::Unsigned)
    }

    /// Consume a negative integer, returning `n` where the value is `-1 - n`.
    pub fn get_negative_raw(&mut self) -> Result<u64, Error> {
        self.get_head_of(MajorType::Negative)
    }

    pub fn get_negative_integer(&mut self) -> Result<i64, Error> {
        self.atomic(|c| match read_head(c)? {
            (MajorType::Negative, n) => negative_from_raw(n),
            (major, _) => Err(Error::IncorrectType(MajorType::Negative.type_name(), major)),
        })
    }

    /// Consume an unsigned or negative integer as an `i64`.
    pub fn get_number(&mut self) -> Result<i64, Error> {
        self.atomic(|c| match read_head(c)? {
            (MajorType::Unsigned, n) => i64::try_from(n).map_err(|_| Error::IntegerOverflow(n)),
            (MajorType::Negative, n) => negative_from_raw(n),
            (major, _) => Err(Error::IncorrectType("Integer", major)),
        })
    }

    /// Consume a simple value, returning its number (20 = false, 21 = true,
    /// 22 = null).
    pub fn get_simple_value(&mut self) -> Result<u8, Error> {
        self.atomic(|c| {
            let initial = c.peek()?;
            match (MajorType::from_initial_byte(initial), initial & 0x1f) {
                (MajorType::Simple, minor @ 0..=23) => {
                    c.advance(1)?;
                    Ok(minor)
                }
                (MajorType::Simple, 24) => {
                    c.advance(1)?;
                    match c.read_u8()? {
                        // The two-byte form is only well-formed for 32..=255
                        v if v < 32 => Err(Error::Unsupported(v)),
                        v => Ok(v),
                    }
                }
                (MajorType::Simple, minor) => Err(Error::Unsupported(minor)),
                (major, _) => Err(Error::IncorrectType(MajorType::Simple.type_name(), major)),
            }
        })
    }

    pub fn get_bool(&mut self) -> Result<bool, Error> {
        let v = self.cursor;
        match self.get_simple_value()? {
            20 => Ok(false),
            21 => Ok(true),
            _ => {
                self.cursor = v;
                Err(Error::IncorrectType("Boolean", MajorType::Simple))
            }
        }
    }

    /// Consume a null, returning `false` without consuming if the next item
    /// is anything else.
    pub fn get_nil(&mut self) -> Result<bool, Error> {
        if self.cursor.peek()? == 0xf6 {
            self.cursor.advance(1)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Copy the next `dst.len()` raw bytes, normally the payload of a text
    /// string whose length was read with [`get_string_len`](Self::get_string_len).
    pub fn get_string(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        dst.copy_from_slice(self.cursor.take(dst.len())?);
        Ok(())
    }

    /// As [`get_string`](Self::get_string), for byte string payloads.
    pub fn get_array(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        self.get_string(dst)
    }

    /// Consume a byte or text string into a newly allocated buffer.
    pub fn get_string_array(&mut self) -> Result<OwnedString, Error> {
        let allocator = &self.allocator;
        let mut cursor = self.cursor;
        let (major, len) = read_head(&mut cursor)?;
        if !matches!(major, MajorType::Bytes | MajorType::Text) {
            return Err(Error::IncorrectType("String", major));
        }
        let payload = cursor.take(to_len(len)?)?;
        let data = copy_into(allocator, payload)?;
        self.cursor = cursor;
        Ok(if major == MajorType::Text {
            OwnedString::Text(data)
        } else {
            OwnedString::Bytes(data)
        })
    }

    /// Consume a text string as a validated UTF-8 `String`.
    pub fn get_text(&mut self) -> Result<String, Error> {
        match self.get_next_element()? {
            MajorType::Text => {}
            major => return Err(Error::IncorrectType(MajorType::Text.type_name(), major)),
        }
        let v = self.cursor;
        let data = self.get_string_array()?.into_bytes();
        String::from_utf8(data).map_err(|_| {
            self.cursor = v;
            Error::InvalidUtf8
        })
    }

    /// Check that the item at the read position, its head plus the length
    /// its head announces, ends at or before absolute offset `end`.
    ///
    /// A violation is logged and reported as `Ok(false)` so the caller can
    /// reject the input. Nothing is consumed.
    pub fn elem_contained(&self, end: usize) -> Result<bool, Error> {
        let start = self.cursor.offset();
        let mut cursor = self.cursor;
        let (_, size) = read_head(&mut cursor)?;
        let last = (cursor.offset() as u64).saturating_add(size);
        if last > end as u64 {
            tracing::warn!(
                "CBOR item at offset {start} extends to {last}, beyond the end of its container at {end}"
            );
            Ok(false)
        } else {
            Ok(true)
        }
    }
}
