//! A bounds-checked cursor over a fixed-size byte buffer.
//!
//! [`BufferCursor`] wraps a byte buffer and an offset. It reads and writes fixed-width integers,
//! IEEE-754 floating point numbers and text at the offset, advancing it by the number of bytes
//! consumed or produced. Multi-byte values are little-endian by default; every such operation
//! has a `_be` twin for big-endian.
//!
//! The buffer never grows. Any operation that would touch bytes past the end of the buffer, or
//! move the offset outside `0..=len`, fails with [`CursorError::OutOfRange`] and leaves both the
//! offset and the buffer contents unchanged.
//!
//! ```
//! use buffer_cursor::BufferCursor;
//!
//! let mut c = BufferCursor::allocate(16);
//! c.write_u64(u64::MAX).unwrap();
//! c.write_i32_be(-2).unwrap();
//! assert_eq!(c.offset(), 12);
//!
//! c.reset();
//! assert_eq!(c.read_u64(), Ok(u64::MAX));
//! assert_eq!(c.read_i32_be(), Ok(-2));
//! assert!(c.read_u64().is_err());
//! assert_eq!(c.offset(), 12);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

/// Emits a `trace` event describing a rejected operation, when the `tracing` feature is on.
macro_rules! trace_rejected {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

mod cursor;
mod error;
mod reader;
mod text;
mod writer;

#[cfg(feature = "std")]
mod io;


pub use cursor::BufferCursor;
pub use error::{CursorError, Result};
pub use text::TextEncoding;
