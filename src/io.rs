//! `std::io` adapters.
//!
//! These let a `BufferCursor` stand in wherever a `Read`, `Write` or `Seek` is expected. They
//! follow `std::io` conventions rather than the all-or-nothing rule of the typed methods: `read`
//! and `write` transfer as many bytes as fit and report how many. `seek` is still strict and
//! refuses to move outside `0..=len`.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::{BufferCursor, CursorError};

impl From<CursorError> for io::Error {
    fn from(e: CursorError) -> Self {
        let kind = match e {
            CursorError::OutOfRange { .. } | CursorError::CannotEncode { .. } => {
                io::ErrorKind::InvalidInput
            }
            CursorError::InvalidText { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}

impl<B: AsRef<[u8]>> Read for BufferCursor<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(self.read_bytes(n)?);
        Ok(n)
    }
}

impl<B: AsMut<[u8]> + AsRef<[u8]>> Write for BufferCursor<B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        self.write_bytes(&buf[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<B: AsRef<[u8]>> Seek for BufferCursor<B> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(n) => usize::try_from(n).ok(),
            SeekFrom::End(delta) => offset_by(self.len(), delta),
            SeekFrom::Current(delta) => offset_by(self.offset, delta),
        };
        self.seek_to(target)?;
        Ok(self.offset as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.offset as u64)
    }
}

fn offset_by(base: usize, delta: i64) -> Option<usize> {
    base.checked_add_signed(isize::try_from(delta).ok()?)
}
