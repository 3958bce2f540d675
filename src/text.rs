use alloc::string::String;
use zerocopy::byteorder::{BigEndian, ByteOrder, LittleEndian, U16};
use zerocopy::{FromBytes, IntoBytes};

use crate::{BufferCursor, CursorError, Result};

/// The text encodings understood by [`BufferCursor::read_string`] and
/// [`BufferCursor::write_string_as`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextEncoding {
    /// UTF-8. This is the native encoding of `str`.
    #[default]
    Utf8,
    /// UTF-16, little-endian code units, no byte order mark.
    Utf16Le,
    /// UTF-16, big-endian code units, no byte order mark.
    Utf16Be,
    /// ISO-8859-1. Each byte is the code point of the same value, so every byte sequence
    /// decodes, but only characters up to U+00FF can be encoded.
    ///
    /// This is not windows-1252: bytes 0x80..=0x9F decode to the C1 control characters, not
    /// to characters such as '€'.
    Latin1,
}

impl TextEncoding {
    /// The conventional label for this encoding, e.g. `"utf-8"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Latin1 => "iso-8859-1",
        }
    }

    /// Returns the number of bytes `text` occupies in this encoding.
    ///
    /// Fails with `CannotEncode` if `text` contains a character the encoding cannot represent.
    pub fn encoded_len(self, text: &str) -> Result<usize> {
        match self {
            Self::Utf8 => Ok(text.len()),
            Self::Utf16Le | Self::Utf16Be => Ok(text.encode_utf16().count() * 2),
            Self::Latin1 => {
                let mut n = 0;
                for c in text.chars() {
                    if u32::from(c) > 0xff {
                        return Err(CursorError::CannotEncode { encoding: self });
                    }
                    n += 1;
                }
                Ok(n)
            }
        }
    }

    /// Decodes `bytes` into a `String`. Malformed input is an error; nothing is replaced.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => match core::str::from_utf8(bytes) {
                Ok(s) => Ok(String::from(s)),
                Err(e) => Err(CursorError::InvalidText {
                    encoding: self,
                    valid_up_to: e.valid_up_to(),
                }),
            },
            Self::Utf16Le => decode_utf16::<LittleEndian>(bytes, self),
            Self::Utf16Be => decode_utf16::<BigEndian>(bytes, self),
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Encodes `text` into `out`, which must be exactly `encoded_len(text)` bytes long.
    fn encode_into(self, text: &str, out: &mut [u8]) {
        match self {
            Self::Utf8 => out.copy_from_slice(text.as_bytes()),
            Self::Utf16Le => encode_utf16::<LittleEndian>(text, out),
            Self::Utf16Be => encode_utf16::<BigEndian>(text, out),
            Self::Latin1 => {
                for (b, c) in out.iter_mut().zip(text.chars()) {
                    // encoded_len() has already rejected anything above U+00FF.
                    *b = u32::from(c) as u8;
                }
            }
        }
    }
}

impl core::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

fn decode_utf16<O: ByteOrder>(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    let whole = bytes.len() & !1;
    let Ok(units) = <[U16<O>]>::ref_from_bytes(&bytes[..whole]) else {
        return Err(CursorError::InvalidText {
            encoding,
            valid_up_to: 0,
        });
    };

    let mut s = String::with_capacity(units.len());
    let mut valid_up_to = 0;
    for c in char::decode_utf16(units.iter().map(|u| u.get())) {
        match c {
            Ok(c) => {
                s.push(c);
                valid_up_to += c.len_utf16() * 2;
            }
            Err(_) => {
                return Err(CursorError::InvalidText {
                    encoding,
                    valid_up_to,
                })
            }
        }
    }

    // A trailing odd byte is half a code unit.
    if whole != bytes.len() {
        return Err(CursorError::InvalidText {
            encoding,
            valid_up_to,
        });
    }

    Ok(s)
}

fn encode_utf16<O: ByteOrder>(text: &str, out: &mut [u8]) {
    for (dst, unit) in out.chunks_exact_mut(2).zip(text.encode_utf16()) {
        dst.copy_from_slice(U16::<O>::new(unit).as_bytes());
    }
}

/// Text reads and writes.
impl<B: AsRef<[u8]>> BufferCursor<B> {
    /// Reads `len` bytes and decodes them as text in `encoding`.
    ///
    /// The bytes are taken as-is: there is no null termination, so any trailing bytes inside
    /// `len` (including zeros) become part of the returned text. If the bytes are not valid in
    /// `encoding`, this returns `InvalidText` and the offset does not move.
    pub fn read_string(&mut self, len: usize, encoding: TextEncoding) -> Result<String> {
        let range = self.span(len)?;
        match encoding.decode(&self.buffer.as_ref()[range.clone()]) {
            Ok(s) => {
                self.offset = range.end;
                Ok(s)
            }
            Err(e) => {
                trace_rejected!(offset = self.offset, len, %encoding, "invalid text");
                Err(e)
            }
        }
    }

    /// Reads `len` bytes as UTF-8 and returns them as `&str`, without copying.
    pub fn read_str(&mut self, len: usize) -> Result<&str> {
        let range = self.span(len)?;
        let Self { buffer, offset } = self;
        let buffer: &B = buffer;
        match core::str::from_utf8(&buffer.as_ref()[range.clone()]) {
            Ok(s) => {
                *offset = range.end;
                Ok(s)
            }
            Err(e) => {
                trace_rejected!(offset = *offset, len, "invalid utf-8");
                Err(CursorError::InvalidText {
                    encoding: TextEncoding::Utf8,
                    valid_up_to: e.valid_up_to(),
                })
            }
        }
    }

    /// Reads `len` bytes and returns them as `&BStr`. The bytes are not validated.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self, len: usize) -> Result<&bstr::BStr> {
        Ok(bstr::BStr::new(self.read_bytes(len)?))
    }
}

impl<B: AsMut<[u8]> + AsRef<[u8]>> BufferCursor<B> {
    /// Writes `text` as UTF-8, with no length prefix and no terminator.
    ///
    /// The bound is checked against the encoded length in bytes, not the number of characters,
    /// so `"é"` needs two bytes of room. If the text does not fit, nothing is written.
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Encodes `text` in `encoding` and writes it, with no length prefix and no terminator.
    /// Returns the number of bytes written.
    ///
    /// The encoded length is computed before anything is written, so a string that does not fit
    /// (or cannot be encoded) leaves the buffer untouched.
    pub fn write_string_as(&mut self, text: &str, encoding: TextEncoding) -> Result<usize> {
        let len = match encoding.encoded_len(text) {
            Ok(len) => len,
            Err(e) => {
                trace_rejected!(%encoding, "text cannot be encoded");
                return Err(e);
            }
        };
        encoding.encode_into(text, self.write_span(len)?);
        Ok(len)
    }
}
