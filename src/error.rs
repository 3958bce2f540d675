use crate::TextEncoding;

/// Result type for [`BufferCursor`](crate::BufferCursor) operations.
pub type Result<T> = core::result::Result<T, CursorError>;

/// Error type for `BufferCursor`
///
/// Every operation that returns an error leaves the cursor offset and the buffer contents
/// exactly as they were before the call.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CursorError {
    /// A position, or the end of a span of bytes, falls outside `0..=length`.
    OutOfRange {
        /// The requested position. This is `None` when the position cannot be represented,
        /// either because it lies before the start of the buffer or because computing it
        /// overflowed `usize`.
        position: Option<usize>,
        /// The length of the buffer.
        length: usize,
    },

    /// `read_string` found bytes that are not well-formed text in the requested encoding.
    InvalidText {
        /// The encoding that was requested.
        encoding: TextEncoding,
        /// Number of bytes, from the start of the span, that decoded successfully.
        valid_up_to: usize,
    },

    /// The text contains a character that the requested encoding cannot represent.
    CannotEncode {
        /// The encoding that was requested.
        encoding: TextEncoding,
    },
}

impl core::error::Error for CursorError {}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::OutOfRange {
                position: Some(position),
                length,
            } => write!(f, "Offset out of bounds: {position} / {length}"),
            Self::OutOfRange {
                position: None,
                length,
            } => write!(f, "Offset out of bounds: (unrepresentable) / {length}"),
            Self::InvalidText {
                encoding,
                valid_up_to,
            } => write!(
                f,
                "The data is not valid {encoding} (valid up to byte {valid_up_to})"
            ),
            Self::CannotEncode { encoding } => {
                write!(f, "The text cannot be encoded as {encoding}")
            }
        }
    }
}
