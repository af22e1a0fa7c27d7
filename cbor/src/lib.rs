/*!
A minimal CBOR (RFC 8949) encoder and decoder for the value subset used by
OSCORE security contexts: null and boolean simple values, unsigned and
negative integers, byte and text strings, arrays, maps, tags and generic
simple values.

Encoding writes into caller-supplied buffers through a bounds-checked
[`WriteCursor`](cursor::WriteCursor); decoding reads through a
[`ReadCursor`](cursor::ReadCursor). The [`walk`] module measures or copies the
exact byte extent of arbitrarily nested items without interpreting them.
*/
#![no_std]
extern crate alloc;

pub mod alloc_buf;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod walk;

mod error;
mod major_type;

pub use error::Error;
pub use major_type::MajorType;

/// Default bound on container nesting accepted by the structural walker.
pub const DEFAULT_MAX_RECURSION: usize = 16;


#[cfg(test)]
mod encode_tests;
