/*!
Structural walking of CBOR items whose contents the caller does not need to
interpret.

[`skip_value`](Decoder::skip_value) measures the exact encoded length of the
next item, descending into arrays and maps, and
[`strip_value`](Decoder::strip_value) copies those bytes out verbatim. This
is what lets opaque sub-structures be passed through unchanged.

A tag is a prefix of the item it applies to, so skipping a tag consumes the
whole tag head (including any extended tag number) and then the tagged item,
with the tagged item counting one level towards the nesting limit.
*/

use super::alloc_buf::{Allocator, copy_into};
use super::cursor::ReadCursor;
use super::decode::{Decoder, read_head, to_len};
use super::*;
use alloc::vec::Vec;

fn skip(cursor: &mut ReadCursor, max_recursion: usize) -> Result<usize, Error> {
    let start = cursor.offset();
    let initial = cursor.peek()?;
    match MajorType::from_initial_byte(initial) {
        MajorType::Simple => match initial & 0x1f {
            0..=23 => cursor.advance(1)?,
            24 => {
                cursor.advance(1)?;
                let v = cursor.read_u8()?;
                if v < 32 {
                    return Err(Error::Unsupported(v));
                }
            }
            minor => return Err(Error::Unsupported(minor)),
        },
        MajorType::Unsigned | MajorType::Negative => {
            read_head(cursor)?;
        }
        MajorType::Tag => {
            if max_recursion == 0 {
                return Err(Error::MaxRecursion);
            }
            let (_, tag) = read_head(cursor)?;
            tracing::trace!("Skipping item with tag {tag} at offset {start}");
            skip(cursor, max_recursion - 1)?;
        }
        MajorType::Bytes | MajorType::Text => {
            let (_, len) = read_head(cursor)?;
            cursor.advance(to_len(len)?)?;
        }
        major @ (MajorType::Array | MajorType::Map) => {
            if max_recursion == 0 {
                return Err(Error::MaxRecursion);
            }
            let (_, count) = read_head(cursor)?;
            tracing::trace!("Skipping {major} of {count} items at offset {start}");

            let per_entry = if major == MajorType::Map { 2 } else { 1 };
            for _ in 0..count {
                for _ in 0..per_entry {
                    skip(cursor, max_recursion - 1)?;
                }
            }
        }
    }
    Ok(cursor.offset() - start)
}

impl<'a, A: Allocator> Decoder<'a, A> {
    /// Consume the next item, including all nested children, and return its
    /// total encoded length.
    ///
    /// Nesting deeper than the decoder's maximum recursion fails with
    /// [`Error::MaxRecursion`]. Floating-point items are not supported.
    pub fn skip_value(&mut self) -> Result<usize, Error> {
        let max_recursion = self.max_recursion;
        self.atomic(|c| skip(c, max_recursion))
    }

    /// Consume the next item and return its raw encoded bytes, borrowed from
    /// the input.
    pub fn strip_value_ref(&mut self) -> Result<&'a [u8], Error> {
        let start = self.cursor.offset();
        let len = self.skip_value()?;
        Ok(&self.cursor.data()[start..start + len])
    }

    /// Consume the next item and return a copy of its raw encoded bytes in a
    /// newly allocated buffer of exactly that length.
    pub fn strip_value(&mut self) -> Result<Vec<u8>, Error> {
        let mut cursor = self.cursor;
        let start = cursor.offset();
        skip(&mut cursor, self.max_recursion)?;
        let data = copy_into(&self.allocator, &cursor.data()[start..cursor.offset()])?;
        self.cursor = cursor;
        Ok(data)
    }
}
