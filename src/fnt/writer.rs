//! Cursor-threading write primitives and the two field sinks built on them.
//!
//! Every `put_*` function takes the output buffer, a value and the current
//! offset, and returns the offset just past the written value. All integers
//! are little-endian.

use crate::error::{Error, Result};

/// Destination for the fields of a block payload.
///
/// The block schema in [`super::schema`] is written once against this trait
/// and evaluated by both [`SizeCounter`] and [`Emitter`].
pub trait FieldSink {
    /// Unsigned byte.
    fn u8(&mut self, value: u8) -> Result<()>;
    /// Unsigned little-endian 16-bit integer.
    fn u16(&mut self, value: u16) -> Result<()>;
    /// Signed little-endian 16-bit integer.
    fn i16(&mut self, value: i16) -> Result<()>;
    /// Unsigned little-endian 32-bit integer.
    fn u32(&mut self, value: u32) -> Result<()>;
    /// Raw bytes followed by a single NUL terminator.
    fn cstr(&mut self, value: &str) -> Result<()>;
}

/// Copies `bytes` into `buf` at `offset`.
///
/// # Errors
/// Returns [`Error::Overrun`] if the bytes do not fit; `buf` is untouched.
pub fn put_bytes(buf: &mut [u8], bytes: &[u8], offset: usize) -> Result<usize> {
    let capacity = buf.len();
    let overrun = || Error::Overrun {
        offset,
        len: bytes.len(),
        capacity,
    };

    let end = offset.checked_add(bytes.len()).ok_or_else(overrun)?;
    let dest = buf.get_mut(offset..end).ok_or_else(overrun)?;
    dest.copy_from_slice(bytes);
    Ok(end)
}

// Generate a put_<type> function using <type>::to_le_bytes.
macro_rules! generate_put_func {
    ($(#[$doc:meta])* fn $func_name:ident($input_type:ident)) => {
        $(#[$doc])*
        ///
        /// # Errors
        /// Returns [`Error::Overrun`] if the value does not fit.
        pub fn $func_name(buf: &mut [u8], value: $input_type, offset: usize) -> Result<usize> {
            put_bytes(buf, &value.to_le_bytes(), offset)
        }
    };
}

generate_put_func!(/// Writes an unsigned byte.
    fn put_u8(u8));
generate_put_func!(/// Writes an unsigned 16-bit integer.
    fn put_u16(u16));
generate_put_func!(/// Writes a signed 16-bit integer.
    fn put_i16(i16));
generate_put_func!(/// Writes an unsigned 32-bit integer.
    fn put_u32(u32));
generate_put_func!(/// Writes a signed 32-bit integer.
    fn put_i32(i32));

/// Writes `value` followed by a NUL terminator.
///
/// # Errors
/// Returns [`Error::Overrun`] if the string and terminator do not fit.
pub fn put_cstr(buf: &mut [u8], value: &str, offset: usize) -> Result<usize> {
    let offset = put_bytes(buf, value.as_bytes(), offset)?;
    put_u8(buf, 0, offset)
}

/// Sums the widths of the fields it is fed without writing anything.
#[derive(Debug, Default)]
pub struct SizeCounter {
    len: usize,
}

impl SizeCounter {
    /// Number of bytes counted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes have been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn add(&mut self, width: usize) -> Result<()> {
        self.len = self.len.checked_add(width).ok_or_else(|| Error::Overrun {
            offset: self.len,
            len: width,
            capacity: usize::MAX,
        })?;
        Ok(())
    }
}

impl FieldSink for SizeCounter {
    fn u8(&mut self, _: u8) -> Result<()> {
        self.add(1)
    }

    fn u16(&mut self, _: u16) -> Result<()> {
        self.add(2)
    }

    fn i16(&mut self, _: i16) -> Result<()> {
        self.add(2)
    }

    fn u32(&mut self, _: u32) -> Result<()> {
        self.add(4)
    }

    fn cstr(&mut self, value: &str) -> Result<()> {
        self.add(value.len() + 1)
    }
}

/// Writes the fields it is fed into a pre-allocated buffer.
#[derive(Debug)]
pub struct Emitter<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> Emitter<'a> {
    /// Starts emitting into `buf` at `offset`.
    pub fn new(buf: &'a mut [u8], offset: usize) -> Self {
        Emitter { buf, offset }
    }

    /// Offset just past the last written field.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl FieldSink for Emitter<'_> {
    fn u8(&mut self, value: u8) -> Result<()> {
        self.offset = put_u8(self.buf, value, self.offset)?;
        Ok(())
    }

    fn u16(&mut self, value: u16) -> Result<()> {
        self.offset = put_u16(self.buf, value, self.offset)?;
        Ok(())
    }

    fn i16(&mut self, value: i16) -> Result<()> {
        self.offset = put_i16(self.buf, value, self.offset)?;
        Ok(())
    }

    fn u32(&mut self, value: u32) -> Result<()> {
        self.offset = put_u32(self.buf, value, self.offset)?;
        Ok(())
    }

    fn cstr(&mut self, value: &str) -> Result<()> {
        self.offset = put_cstr(self.buf, value, self.offset)?;
        Ok(())
    }
}
