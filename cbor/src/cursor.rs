/*!
Bounds-checked byte cursors over caller-supplied buffers.

Both cursors hold a slice and a position; the remaining length is always
derived as `len - position`, so the two can never drift apart. Every
operation checks the remaining length before touching the buffer and only
advances on success.
*/

use super::Error;

/// A read position into an immutable buffer.
#[derive(Debug, Clone, Copy)]
pub struct ReadCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// The whole underlying buffer, including bytes already consumed.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, needed: usize) -> Result<(), Error> {
        let remaining = self.remaining();
        if needed > remaining {
            Err(Error::NotEnoughData { needed, remaining })
        } else {
            Ok(())
        }
    }

    /// Return the next byte without consuming it.
    pub fn peek(&self) -> Result<u8, Error> {
        self.check(1)?;
        Ok(self.data[self.offset])
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let b = self.peek()?;
        self.offset += 1;
        Ok(b)
    }

    pub fn advance(&mut self, n: usize) -> Result<(), Error> {
        self.check(n)?;
        self.offset += n;
        Ok(())
    }

    /// Consume `n` bytes, returning them as a borrowed slice.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        self.check(n)?;
        let start = self.offset;
        self.offset += n;
        Ok(&self.data[start..self.offset])
    }
}

/// A write position into a mutable, fixed-capacity buffer.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    data: &'a mut [u8],
    offset: usize,
}

impl<'a> WriteCursor<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.data[..self.offset]
    }

    /// Fail unless at least `needed` bytes of capacity remain.
    pub fn reserve(&self, needed: usize) -> Result<(), Error> {
        let remaining = self.remaining();
        if needed > remaining {
            Err(Error::NotEnoughData { needed, remaining })
        } else {
            Ok(())
        }
    }

    pub fn put_u8(&mut self, b: u8) -> Result<(), Error> {
        self.put_slice(&[b])
    }

    pub fn put_slice(&mut self, b: &[u8]) -> Result<(), Error> {
        self.reserve(b.len())?;
        let end = self.offset + b.len();
        self.data[self.offset..end].copy_from_slice(b);
        self.offset = end;
        Ok(())
    }
}
