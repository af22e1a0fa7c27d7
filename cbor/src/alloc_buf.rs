/*!
Allocation of owned result buffers.

Decoder operations that extract variable-length content hand back a `Vec<u8>`
sized exactly to the decoded length. The buffer comes from an [`Allocator`],
so constrained callers can cap or pool allocations; releasing it is an
ordinary `Drop`.
*/

use super::Error;
use alloc::vec::Vec;

pub trait Allocator {
    /// Return an empty buffer with capacity for at least `len` bytes, or
    /// [`Error::AllocFailed`].
    fn allocate(&self, len: usize) -> Result<Vec<u8>, Error>;
}

/// The global heap, with allocation failure reported rather than aborting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

impl Allocator for Global {
    fn allocate(&self, len: usize) -> Result<Vec<u8>, Error> {
        let mut v = Vec::new();
        v.try_reserve_exact(len).map_err(|_| {
            tracing::debug!("Failed to reserve {len} bytes for decoded item");
            Error::AllocFailed(len)
        })?;
        Ok(v)
    }
}

/// Refuses any single allocation larger than its limit.
#[derive(Debug, Clone, Copy)]
pub struct Limited {
    pub max: usize,
}

impl Allocator for Limited {
    fn allocate(&self, len: usize) -> Result<Vec<u8>, Error> {
        if len > self.max {
            tracing::debug!("Refusing {len} byte allocation, limit is {}", self.max);
            return Err(Error::AllocFailed(len));
        }
        Global.allocate(len)
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, len: usize) -> Result<Vec<u8>, Error> {
        (**self).allocate(len)
    }
}

/// Copy `src` into a fresh buffer obtained from `allocator`.
pub(crate) fn copy_into<A: Allocator + ?Sized>(
    allocator: &A,
    src: &[u8],
) -> Result<Vec<u8>, Error> {
    let mut v = allocator.allocate(src.len())?;
    v.extend_from_slice(src);
    Ok(v)
}
