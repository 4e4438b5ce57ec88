//! Reference decoder used to check encoder output.

use std::io::{self, Read};

use super::schema::Block;
use super::HEADER;
use crate::meta::{FontDescription, Glyph, Kerning};

/// A wrapper around a reader that provides methods for reading the
/// little-endian fields of a `.fnt` file.
pub struct FntReader<T: io::Read> {
    reader: T,
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

// Generate a read_<type> function using <type>::from_le_bytes.
macro_rules! generate_int_reader_func {
    (fn $func_name:ident() -> $return_type:ident, $size:expr) => {
        pub fn $func_name(&mut self) -> io::Result<$return_type> {
            let mut buf = [0; $size];
            self.reader.read_exact(&mut buf)?;
            Ok($return_type::from_le_bytes(buf))
        }
    };
}

impl<T: io::Read> FntReader<T> {
    pub fn new(reader: T) -> Self {
        FntReader { reader }
    }

    generate_int_reader_func!(fn read_u8() -> u8, 1);
    generate_int_reader_func!(fn read_u16() -> u16, 2);
    generate_int_reader_func!(fn read_i16() -> i16, 2);
    generate_int_reader_func!(fn read_u32() -> u32, 4);
    generate_int_reader_func!(fn read_i32() -> i32, 4);

    pub fn read_array(&mut self, size: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0; size];
        self.reader.read_exact(&mut buf[..])?;
        Ok(buf)
    }

    /// Reads bytes up to and including a NUL terminator.
    pub fn read_cstr(&mut self) -> io::Result<String> {
        let mut bytes = Vec::new();
        loop {
            match self.read_u8()? {
                0 => break,
                byte => bytes.push(byte),
            }
        }
        String::from_utf8(bytes).map_err(|err| invalid(format!("Error parsing utf-8: {err}")))
    }
}

/// Parses a complete `.fnt` file back into a font description.
///
/// Channel masks always come back as `Some`, since the file cannot tell an
/// explicit 1 from an unspecified mask.
pub fn decode(bytes: &[u8]) -> io::Result<FontDescription> {
    let mut reader = FntReader::new(bytes);
    let header = reader.read_array(HEADER.len())?;
    if header != HEADER {
        return Err(invalid(format!("bad header {header:?}")));
    }

    let mut font = FontDescription::default();
    let mut page_count = 0;

    let mut rest = &bytes[HEADER.len()..];
    while !rest.is_empty() {
        let mut block_reader = FntReader::new(rest);
        let tag = block_reader.read_u8()?;
        let len = usize::try_from(block_reader.read_i32()?).map_err(|err| invalid(err.to_string()))?;
        let payload = block_reader.read_array(len)?;
        rest = &rest[5 + len..];

        let mut r = FntReader::new(&payload[..]);
        match tag {
            t if t == Block::Info.tag() => {
                let info = &mut font.info;
                info.size = r.read_i16()?;
                info.smooth = r.read_u8()? != 0;
                info.unicode = r.read_u8()? != 0;
                info.stretch_h = r.read_u16()?;
                info.aa = r.read_u8()?;
                for pad in &mut info.padding {
                    *pad = r.read_u8()?;
                }
                for space in &mut info.spacing {
                    *space = r.read_u8()?;
                }
                info.outline = r.read_u8()?;
                info.face = r.read_cstr()?;
            }
            t if t == Block::Common.tag() => {
                let common = &mut font.common;
                common.line_height = r.read_u16()?;
                common.base = r.read_u16()?;
                common.scale_w = r.read_u16()?;
                common.scale_h = r.read_u16()?;
                page_count = r.read_u16()?;
                common.packed = r.read_u8()? != 0;
                common.alpha_chnl = r.read_u8()?;
                common.red_chnl = r.read_u8()?;
                common.green_chnl = r.read_u8()?;
                common.blue_chnl = r.read_u8()?;
            }
            t if t == Block::Pages.tag() => {
                for _ in 0..page_count {
                    font.pages.push(r.read_cstr()?);
                }
            }
            t if t == Block::Chars.tag() => {
                for _ in 0..len / 20 {
                    font.chars.push(Glyph {
                        id: r.read_u32()?,
                        x: r.read_u16()?,
                        y: r.read_u16()?,
                        width: r.read_u16()?,
                        height: r.read_u16()?,
                        xoffset: r.read_i16()?,
                        yoffset: r.read_i16()?,
                        xadvance: r.read_i16()?,
                        page: r.read_u8()?,
                        chnl: Some(r.read_u8()?),
                    });
                }
            }
            t if t == Block::Kerning.tag() => {
                for _ in 0..len / 10 {
                    font.kernings.push(Kerning {
                        first: r.read_u32()?,
                        second: r.read_u32()?,
                        amount: r.read_i16()?,
                    });
                }
            }
            _ => return Err(invalid(format!("unknown block tag {tag}"))),
        }

        if !r.reader.is_empty() {
            return Err(invalid(format!("{} trailing bytes in block {tag}", r.reader.len())));
        }
    }

    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_little_endian_numbers() {
        #[rustfmt::skip]
        let mut reader = FntReader::new(&[
            0xff,
            0x02, 0x01,
            0xfe, 0xff,
            0x06, 0x05, 0x04, 0x03,
            0x0f, 0x00, 0x00, 0x00,
        ][..]);

        assert_eq!(reader.read_u8().unwrap(), 0xff);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.read_u32().unwrap(), 0x0304_0506);
        assert_eq!(reader.read_i32().unwrap(), 15);
        assert!(reader.read_u8().is_err());
    }

    #[test]
    fn it_reads_null_terminated_strings() {
        let mut reader = FntReader::new(&b"abc\0\0x"[..]);
        assert_eq!(reader.read_cstr().unwrap(), "abc");
        assert_eq!(reader.read_cstr().unwrap(), "");
        assert!(reader.read_cstr().is_err());
    }

    #[test]
    fn rejects_bad_header() {
        assert!(decode(b"BMF\x02").is_err());
        assert!(decode(b"BM").is_err());
    }
}
