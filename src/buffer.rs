use std::ptr::NonNull;

use crate::error::{Error, Result};

/// Frees a buffer handed over by the native library. Receives the pointer and length the buffer was wrapped with.
pub type ReleaseFn = unsafe fn(NonNull<u8>, usize);

/// Who is responsible for a foreign buffer once it is wrapped
#[derive(Clone, Copy, Debug)]
pub enum Ownership {
    /// The native library keeps the buffer alive, nothing is released on drop
    Borrowed,
    /// The wrapper releases the buffer exactly once, with the given function
    Owned(ReleaseFn),
}

pub(crate) enum Storage<'a> {
    Owned(Box<[u8]>),
    Borrowed(&'a [u8]),
    Foreign(ForeignBuffer),
}
impl Storage<'_> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(boxed) => boxed,
            Self::Borrowed(slice) => slice,
            Self::Foreign(foreign) => foreign.as_slice(),
        }
    }
    pub fn is_owning(&self) -> bool {
        !matches!(self, Self::Borrowed(_))
    }
}

/// Copies `raw` into a fresh allocation, reporting allocation failure instead of aborting
pub(crate) fn copy_to_box(raw: &[u8]) -> Result<Box<[u8]>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(raw.len())
        .map_err(|_| Error::out_of_memory(raw.len()))?;
    vec.extend_from_slice(raw);
    Ok(vec.into_boxed_slice())
}

pub(crate) struct ForeignBuffer {
    pointer: NonNull<u8>,
    length: usize,
    release: ReleaseFn,
}
// Valid, because ForeignBuffer never mutates the memory and is its sole owner.
// Callers of `new` guarantee that `release` may run on any thread.
unsafe impl Send for ForeignBuffer {}
unsafe impl Sync for ForeignBuffer {}
impl ForeignBuffer {
    /// # Safety
    /// `pointer` must be valid for reads of `length` bytes until `release` is called,
    /// nobody else may release it, and `release` must be safe to call from any thread.
    pub unsafe fn new(pointer: NonNull<u8>, length: usize, release: ReleaseFn) -> Self {
        tracing::trace!(?pointer, length, "took ownership of foreign OID buffer");
        Self {
            pointer,
            length,
            release,
        }
    }
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.pointer.as_ptr(), self.length) }
    }
}
impl Drop for ForeignBuffer {
    fn drop(&mut self) {
        tracing::trace!(pointer = ?self.pointer, length = self.length, "releasing foreign OID buffer");
        unsafe { (self.release)(self.pointer, self.length) };
    }
}
