use crate::{BufferCursor, Result};

/// Fixed-width numeric writes. Multi-byte values are little-endian unless the method name ends
/// in `_be`. A value that would not fit before the end of the buffer is rejected whole; none of
/// its bytes are written.
impl<B: AsMut<[u8]> + AsRef<[u8]>> BufferCursor<B> {
    /// Writes a single `u8` value
    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_cbytes([value])
    }

    /// Writes a single `i8` value
    #[inline(always)]
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `i16` value
    #[inline(always)]
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `i16` value in big-endian byte order
    #[inline(always)]
    pub fn write_i16_be(&mut self, value: i16) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `u16` value
    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `u16` value in big-endian byte order
    #[inline(always)]
    pub fn write_u16_be(&mut self, value: u16) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `i32` value
    #[inline(always)]
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `i32` value in big-endian byte order
    #[inline(always)]
    pub fn write_i32_be(&mut self, value: i32) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `u32` value
    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `u32` value in big-endian byte order
    #[inline(always)]
    pub fn write_u32_be(&mut self, value: u32) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `i64` value
    #[inline(always)]
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `i64` value in big-endian byte order
    #[inline(always)]
    pub fn write_i64_be(&mut self, value: i64) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `u64` value
    #[inline(always)]
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `u64` value in big-endian byte order
    #[inline(always)]
    pub fn write_u64_be(&mut self, value: u64) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `f32` value.
    ///
    /// The bit pattern is preserved exactly, including NaN payloads and the sign of zero.
    #[inline(always)]
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `f32` value in big-endian byte order
    #[inline(always)]
    pub fn write_f32_be(&mut self, value: f32) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a single `f64` value.
    ///
    /// The bit pattern is preserved exactly, including NaN payloads and the sign of zero.
    #[inline(always)]
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a single `f64` value in big-endian byte order
    #[inline(always)]
    pub fn write_f64_be(&mut self, value: f64) -> Result<()> {
        self.write_cbytes(value.to_be_bytes())
    }
}
