use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{CursorError, Result};

/// A read/write position over a fixed-size byte buffer.
///
/// The buffer can be borrowed (`&[u8]`, `&mut [u8]`) or owned (`Vec<u8>`, `[u8; N]`). Reads
/// require `B: AsRef<[u8]>` and writes require `B: AsMut<[u8]>`, so a cursor over `&[u8]` is
/// read-only. The length of the buffer is fixed for the lifetime of the cursor; the cursor never
/// grows, shrinks or reallocates it.
///
/// The offset always satisfies `0 <= offset <= len`. An offset equal to `len` is a valid
/// position ("at end"), but any read or write of a non-empty value from there fails.
///
/// Nothing here is synchronized. If several threads need the same cursor, wrap it in a lock.
///
/// ```
/// use buffer_cursor::{BufferCursor, CursorError};
///
/// let mut data = [0u8; 10];
/// let mut c = BufferCursor::new(&mut data[..]);
/// c.set_offset(5).unwrap();
/// assert_eq!(
///     c.set_offset(11),
///     Err(CursorError::OutOfRange { position: Some(11), length: 10 })
/// );
/// assert_eq!(c.offset(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct BufferCursor<B> {
    pub(crate) buffer: B,
    pub(crate) offset: usize,
}

impl<B> BufferCursor<B> {
    /// Wraps an existing buffer. The offset starts at zero.
    pub fn new(buffer: B) -> Self {
        Self { buffer, offset: 0 }
    }

    /// The current offset.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Resets the offset to zero. This cannot fail.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Accesses the inner buffer
    pub fn get_ref(&self) -> &B {
        &self.buffer
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl BufferCursor<Vec<u8>> {
    /// Allocates a new buffer of `size` bytes, all zero, and wraps it. The offset starts at zero.
    pub fn allocate(size: usize) -> Self {
        Self::new(vec![0; size])
    }
}

impl<B> From<B> for BufferCursor<B> {
    fn from(buffer: B) -> Self {
        Self::new(buffer)
    }
}

impl<B: AsRef<[u8]>> BufferCursor<B> {
    /// The length of the underlying buffer, in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Returns `true` if the underlying buffer has no bytes at all.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of bytes between the offset and the end of the buffer.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len() - self.offset
    }

    /// Checks that `position` lies within `0..=len`.
    ///
    /// This is the one gate used by every positioning call and, for the end of the span, by
    /// every read and write.
    pub fn check(&self, position: usize) -> Result<()> {
        let length = self.len();
        if position > length {
            trace_rejected!(position, length, "position out of range");
            return Err(CursorError::OutOfRange {
                position: Some(position),
                length,
            });
        }
        Ok(())
    }

    /// Like `check`, but for a position that may not be representable as `usize`.
    fn check_opt(&self, position: Option<usize>) -> Result<usize> {
        match position {
            Some(position) => {
                self.check(position)?;
                Ok(position)
            }
            None => {
                let length = self.len();
                trace_rejected!(length, "position before start of buffer or overflowed");
                Err(CursorError::OutOfRange {
                    position: None,
                    length,
                })
            }
        }
    }

    /// Validates that `len` bytes starting at the offset lie within the buffer, and returns
    /// the range they occupy. Does not move the offset.
    #[inline(always)]
    pub(crate) fn span(&self, len: usize) -> Result<Range<usize>> {
        let end = self.check_opt(self.offset.checked_add(len))?;
        Ok(self.offset..end)
    }

    /// Moves the offset to `position`.
    ///
    /// Fails if `position > len`. On failure the offset is unchanged.
    pub fn set_offset(&mut self, position: usize) -> Result<()> {
        self.check(position)?;
        self.offset = position;
        Ok(())
    }

    /// Moves the offset forward by `n` bytes. Equivalent to `set_offset(offset + n)`.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.offset = self.check_opt(self.offset.checked_add(n))?;
        Ok(())
    }

    /// Moves the offset backward by `n` bytes. Equivalent to `set_offset(offset - n)`.
    pub fn rewind(&mut self, n: usize) -> Result<()> {
        self.offset = self.check_opt(self.offset.checked_sub(n))?;
        Ok(())
    }

    /// Moves the offset to `target`, where `None` stands for a position that could not be
    /// computed.
    pub(crate) fn seek_to(&mut self, target: Option<usize>) -> Result<()> {
        self.offset = self.check_opt(target)?;
        Ok(())
    }

    /// The bytes from the offset to the end of the buffer.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.buffer.as_ref()[self.offset..]
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        let range = self.span(len)?;
        self.offset = range.end;
        Ok(&self.buffer.as_ref()[range])
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let range = self.span(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer.as_ref()[range.clone()]);
        self.offset = range.end;
        Ok(bytes)
    }
}

impl<B: AsMut<[u8]> + AsRef<[u8]>> BufferCursor<B> {
    /// Accesses the bytes of the inner buffer mutably. The offset is not adjusted.
    ///
    /// This hands out a slice rather than `&mut B`, so the length of the buffer cannot change.
    pub fn get_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Writes `bytes` at the offset and advances past them.
    ///
    /// Either all of `bytes` fit before the end of the buffer, or nothing is written.
    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let range = self.span(bytes.len())?;
        self.offset = range.end;
        self.buffer.as_mut()[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Writes a small, fixed-size array of bytes.
    #[inline(always)]
    pub fn write_cbytes<const N: usize>(&mut self, bytes: [u8; N]) -> Result<()> {
        self.write_bytes(&bytes)
    }

    /// Reserves `len` bytes at the offset, advances past them, and returns them for the caller
    /// to fill in.
    pub(crate) fn write_span(&mut self, len: usize) -> Result<&mut [u8]> {
        let range = self.span(len)?;
        self.offset = range.end;
        Ok(&mut self.buffer.as_mut()[range])
    }
}
